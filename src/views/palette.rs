// src/views/palette.rs
//
// Fixed color scales: 8 greens for export volume, 7 reds for import
// volume. The last color of each doubles as the highlight stroke.

use nannou::prelude::*;

pub fn export_scale() -> Vec<Rgb8> {
    vec![
        rgb8(212, 242, 197),
        rgb8(174, 230, 147),
        rgb8(156, 224, 123),
        rgb8(123, 213, 84),
        rgb8(104, 193, 66),
        rgb8(94, 176, 58),
        rgb8(85, 160, 53),
        rgb8(75, 143, 46),
    ]
}

pub fn import_scale() -> Vec<Rgb8> {
    vec![
        rgb8(254, 224, 224),
        rgb8(244, 183, 178),
        rgb8(224, 145, 134),
        rgb8(208, 112, 96),
        rgb8(185, 77, 61),
        rgb8(166, 47, 33),
        rgb8(145, 1, 10),
    ]
}

pub fn water() -> Rgb8 {
    rgb8(181, 213, 229)
}

pub fn land() -> Rgb8 {
    rgb8(221, 221, 221)
}

pub fn marker() -> Rgb8 {
    rgb8(170, 170, 170)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_sizes() {
        assert_eq!(export_scale().len(), 8);
        assert_eq!(import_scale().len(), 7);
    }
}
