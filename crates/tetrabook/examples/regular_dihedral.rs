//! Volume snapshot at the regular dihedral angle.
//!
//! Purpose
//! - Reproduce the still frame of the book animation: pause the page at
//!   2·asin(1/√3) and report both complementary volumes and the inadvertent one.
//! - With equilateral covers the tetrahedron over C0 is regular, so its
//!   natural volume is exactly one.

use tetrabook::prelude::*;

fn main() {
    let angle = regular_dihedral_deg();
    for (name, book) in [
        ("demo", BookGeometry::default()),
        ("equilateral", BookGeometry::symmetric(1.0, 3f64.sqrt())),
    ] {
        let page = Page::on(&book, angle, Facing::Up);
        let natural = complementary(&page, &book)
            .volumes(VolumeCfg::default())
            .expect("complementary volumes");
        let cubic = complementary(&page, &book)
            .volumes(VolumeCfg::with_unit(VolumeUnit::conventional()))
            .expect("complementary volumes");
        let third = inadvertent(&page, &book)
            .and_then(|t| t.volume(VolumeCfg::default()))
            .map(|v| format!("{:>6.3}", v))
            .unwrap_or_else(|e| format!("skipped ({})", e));
        println!(
            "{name:<12} {page}: natural {:>6.3} / {:>6.3}, cubic {:>6.3} / {:>6.3}, inadvertent {}",
            natural[0], natural[1], cubic[0], cubic[1], third
        );
    }
}
