//! # 感知均匀连续色图
//!
//! 256 项查找表，与 matplotlib 同名色图的数据一致。
//!
//! ## 依赖关系
//! - 被 `colour/maps.rs` 使用
//! - 使用 `palette` 的 `Srgb` 颜色类型

use palette::Srgb;

#[rustfmt::skip]
pub const VIRIDIS: &[Srgb<u8>] = &[
    Srgb::new(0x44, 0x01, 0x54), Srgb::new(0x44, 0x02, 0x56), Srgb::new(0x45, 0x04, 0x57), Srgb::new(0x45, 0x05, 0x59),
    Srgb::new(0x46, 0x07, 0x5a), Srgb::new(0x46, 0x08, 0x5c), Srgb::new(0x46, 0x0a, 0x5d), Srgb::new(0x46, 0x0b, 0x5e),
    Srgb::new(0x47, 0x0d, 0x60), Srgb::new(0x47, 0x0e, 0x61), Srgb::new(0x47, 0x10, 0x63), Srgb::new(0x47, 0x11, 0x64),
    Srgb::new(0x47, 0x13, 0x65), Srgb::new(0x48, 0x14, 0x67), Srgb::new(0x48, 0x16, 0x68), Srgb::new(0x48, 0x17, 0x69),
    Srgb::new(0x48, 0x18, 0x6a), Srgb::new(0x48, 0x1a, 0x6c), Srgb::new(0x48, 0x1b, 0x6d), Srgb::new(0x48, 0x1c, 0x6e),
    Srgb::new(0x48, 0x1d, 0x6f), Srgb::new(0x48, 0x1f, 0x70), Srgb::new(0x48, 0x20, 0x71), Srgb::new(0x48, 0x21, 0x73),
    Srgb::new(0x48, 0x23, 0x74), Srgb::new(0x48, 0x24, 0x75), Srgb::new(0x48, 0x25, 0x76), Srgb::new(0x48, 0x26, 0x77),
    Srgb::new(0x48, 0x28, 0x78), Srgb::new(0x48, 0x29, 0x79), Srgb::new(0x47, 0x2a, 0x7a), Srgb::new(0x47, 0x2c, 0x7a),
    Srgb::new(0x47, 0x2d, 0x7b), Srgb::new(0x47, 0x2e, 0x7c), Srgb::new(0x47, 0x2f, 0x7d), Srgb::new(0x46, 0x30, 0x7e),
    Srgb::new(0x46, 0x32, 0x7e), Srgb::new(0x46, 0x33, 0x7f), Srgb::new(0x46, 0x34, 0x80), Srgb::new(0x45, 0x35, 0x81),
    Srgb::new(0x45, 0x37, 0x81), Srgb::new(0x45, 0x38, 0x82), Srgb::new(0x44, 0x39, 0x83), Srgb::new(0x44, 0x3a, 0x83),
    Srgb::new(0x44, 0x3b, 0x84), Srgb::new(0x43, 0x3d, 0x84), Srgb::new(0x43, 0x3e, 0x85), Srgb::new(0x42, 0x3f, 0x85),
    Srgb::new(0x42, 0x40, 0x86), Srgb::new(0x42, 0x41, 0x86), Srgb::new(0x41, 0x42, 0x87), Srgb::new(0x41, 0x44, 0x87),
    Srgb::new(0x40, 0x45, 0x88), Srgb::new(0x40, 0x46, 0x88), Srgb::new(0x3f, 0x47, 0x88), Srgb::new(0x3f, 0x48, 0x89),
    Srgb::new(0x3e, 0x49, 0x89), Srgb::new(0x3e, 0x4a, 0x89), Srgb::new(0x3e, 0x4c, 0x8a), Srgb::new(0x3d, 0x4d, 0x8a),
    Srgb::new(0x3d, 0x4e, 0x8a), Srgb::new(0x3c, 0x4f, 0x8a), Srgb::new(0x3c, 0x50, 0x8b), Srgb::new(0x3b, 0x51, 0x8b),
    Srgb::new(0x3b, 0x52, 0x8b), Srgb::new(0x3a, 0x53, 0x8b), Srgb::new(0x3a, 0x54, 0x8c), Srgb::new(0x39, 0x55, 0x8c),
    Srgb::new(0x39, 0x56, 0x8c), Srgb::new(0x38, 0x58, 0x8c), Srgb::new(0x38, 0x59, 0x8c), Srgb::new(0x37, 0x5a, 0x8c),
    Srgb::new(0x37, 0x5b, 0x8d), Srgb::new(0x36, 0x5c, 0x8d), Srgb::new(0x36, 0x5d, 0x8d), Srgb::new(0x35, 0x5e, 0x8d),
    Srgb::new(0x35, 0x5f, 0x8d), Srgb::new(0x34, 0x60, 0x8d), Srgb::new(0x34, 0x61, 0x8d), Srgb::new(0x33, 0x62, 0x8d),
    Srgb::new(0x33, 0x63, 0x8d), Srgb::new(0x32, 0x64, 0x8e), Srgb::new(0x32, 0x65, 0x8e), Srgb::new(0x31, 0x66, 0x8e),
    Srgb::new(0x31, 0x67, 0x8e), Srgb::new(0x31, 0x68, 0x8e), Srgb::new(0x30, 0x69, 0x8e), Srgb::new(0x30, 0x6a, 0x8e),
    Srgb::new(0x2f, 0x6b, 0x8e), Srgb::new(0x2f, 0x6c, 0x8e), Srgb::new(0x2e, 0x6d, 0x8e), Srgb::new(0x2e, 0x6e, 0x8e),
    Srgb::new(0x2e, 0x6f, 0x8e), Srgb::new(0x2d, 0x70, 0x8e), Srgb::new(0x2d, 0x71, 0x8e), Srgb::new(0x2c, 0x71, 0x8e),
    Srgb::new(0x2c, 0x72, 0x8e), Srgb::new(0x2c, 0x73, 0x8e), Srgb::new(0x2b, 0x74, 0x8e), Srgb::new(0x2b, 0x75, 0x8e),
    Srgb::new(0x2a, 0x76, 0x8e), Srgb::new(0x2a, 0x77, 0x8e), Srgb::new(0x2a, 0x78, 0x8e), Srgb::new(0x29, 0x79, 0x8e),
    Srgb::new(0x29, 0x7a, 0x8e), Srgb::new(0x29, 0x7b, 0x8e), Srgb::new(0x28, 0x7c, 0x8e), Srgb::new(0x28, 0x7d, 0x8e),
    Srgb::new(0x27, 0x7e, 0x8e), Srgb::new(0x27, 0x7f, 0x8e), Srgb::new(0x27, 0x80, 0x8e), Srgb::new(0x26, 0x81, 0x8e),
    Srgb::new(0x26, 0x82, 0x8e), Srgb::new(0x26, 0x82, 0x8e), Srgb::new(0x25, 0x83, 0x8e), Srgb::new(0x25, 0x84, 0x8e),
    Srgb::new(0x25, 0x85, 0x8e), Srgb::new(0x24, 0x86, 0x8e), Srgb::new(0x24, 0x87, 0x8e), Srgb::new(0x23, 0x88, 0x8e),
    Srgb::new(0x23, 0x89, 0x8e), Srgb::new(0x23, 0x8a, 0x8d), Srgb::new(0x22, 0x8b, 0x8d), Srgb::new(0x22, 0x8c, 0x8d),
    Srgb::new(0x22, 0x8d, 0x8d), Srgb::new(0x21, 0x8e, 0x8d), Srgb::new(0x21, 0x8f, 0x8d), Srgb::new(0x21, 0x90, 0x8d),
    Srgb::new(0x21, 0x91, 0x8c), Srgb::new(0x20, 0x92, 0x8c), Srgb::new(0x20, 0x92, 0x8c), Srgb::new(0x20, 0x93, 0x8c),
    Srgb::new(0x1f, 0x94, 0x8c), Srgb::new(0x1f, 0x95, 0x8b), Srgb::new(0x1f, 0x96, 0x8b), Srgb::new(0x1f, 0x97, 0x8b),
    Srgb::new(0x1f, 0x98, 0x8b), Srgb::new(0x1f, 0x99, 0x8a), Srgb::new(0x1f, 0x9a, 0x8a), Srgb::new(0x1e, 0x9b, 0x8a),
    Srgb::new(0x1e, 0x9c, 0x89), Srgb::new(0x1e, 0x9d, 0x89), Srgb::new(0x1f, 0x9e, 0x89), Srgb::new(0x1f, 0x9f, 0x88),
    Srgb::new(0x1f, 0xa0, 0x88), Srgb::new(0x1f, 0xa1, 0x88), Srgb::new(0x1f, 0xa1, 0x87), Srgb::new(0x1f, 0xa2, 0x87),
    Srgb::new(0x20, 0xa3, 0x86), Srgb::new(0x20, 0xa4, 0x86), Srgb::new(0x21, 0xa5, 0x85), Srgb::new(0x21, 0xa6, 0x85),
    Srgb::new(0x22, 0xa7, 0x85), Srgb::new(0x22, 0xa8, 0x84), Srgb::new(0x23, 0xa9, 0x83), Srgb::new(0x24, 0xaa, 0x83),
    Srgb::new(0x25, 0xab, 0x82), Srgb::new(0x25, 0xac, 0x82), Srgb::new(0x26, 0xad, 0x81), Srgb::new(0x27, 0xad, 0x81),
    Srgb::new(0x28, 0xae, 0x80), Srgb::new(0x29, 0xaf, 0x7f), Srgb::new(0x2a, 0xb0, 0x7f), Srgb::new(0x2c, 0xb1, 0x7e),
    Srgb::new(0x2d, 0xb2, 0x7d), Srgb::new(0x2e, 0xb3, 0x7c), Srgb::new(0x2f, 0xb4, 0x7c), Srgb::new(0x31, 0xb5, 0x7b),
    Srgb::new(0x32, 0xb6, 0x7a), Srgb::new(0x34, 0xb6, 0x79), Srgb::new(0x35, 0xb7, 0x79), Srgb::new(0x37, 0xb8, 0x78),
    Srgb::new(0x38, 0xb9, 0x77), Srgb::new(0x3a, 0xba, 0x76), Srgb::new(0x3b, 0xbb, 0x75), Srgb::new(0x3d, 0xbc, 0x74),
    Srgb::new(0x3f, 0xbc, 0x73), Srgb::new(0x40, 0xbd, 0x72), Srgb::new(0x42, 0xbe, 0x71), Srgb::new(0x44, 0xbf, 0x70),
    Srgb::new(0x46, 0xc0, 0x6f), Srgb::new(0x48, 0xc1, 0x6e), Srgb::new(0x4a, 0xc1, 0x6d), Srgb::new(0x4c, 0xc2, 0x6c),
    Srgb::new(0x4e, 0xc3, 0x6b), Srgb::new(0x50, 0xc4, 0x6a), Srgb::new(0x52, 0xc5, 0x69), Srgb::new(0x54, 0xc5, 0x68),
    Srgb::new(0x56, 0xc6, 0x67), Srgb::new(0x58, 0xc7, 0x65), Srgb::new(0x5a, 0xc8, 0x64), Srgb::new(0x5c, 0xc8, 0x63),
    Srgb::new(0x5e, 0xc9, 0x62), Srgb::new(0x60, 0xca, 0x60), Srgb::new(0x63, 0xcb, 0x5f), Srgb::new(0x65, 0xcb, 0x5e),
    Srgb::new(0x67, 0xcc, 0x5c), Srgb::new(0x69, 0xcd, 0x5b), Srgb::new(0x6c, 0xcd, 0x5a), Srgb::new(0x6e, 0xce, 0x58),
    Srgb::new(0x70, 0xcf, 0x57), Srgb::new(0x73, 0xd0, 0x56), Srgb::new(0x75, 0xd0, 0x54), Srgb::new(0x77, 0xd1, 0x53),
    Srgb::new(0x7a, 0xd1, 0x51), Srgb::new(0x7c, 0xd2, 0x50), Srgb::new(0x7f, 0xd3, 0x4e), Srgb::new(0x81, 0xd3, 0x4d),
    Srgb::new(0x84, 0xd4, 0x4b), Srgb::new(0x86, 0xd5, 0x49), Srgb::new(0x89, 0xd5, 0x48), Srgb::new(0x8b, 0xd6, 0x46),
    Srgb::new(0x8e, 0xd6, 0x45), Srgb::new(0x90, 0xd7, 0x43), Srgb::new(0x93, 0xd7, 0x41), Srgb::new(0x95, 0xd8, 0x40),
    Srgb::new(0x98, 0xd8, 0x3e), Srgb::new(0x9b, 0xd9, 0x3c), Srgb::new(0x9d, 0xd9, 0x3b), Srgb::new(0xa0, 0xda, 0x39),
    Srgb::new(0xa2, 0xda, 0x37), Srgb::new(0xa5, 0xdb, 0x36), Srgb::new(0xa8, 0xdb, 0x34), Srgb::new(0xaa, 0xdc, 0x32),
    Srgb::new(0xad, 0xdc, 0x30), Srgb::new(0xb0, 0xdd, 0x2f), Srgb::new(0xb2, 0xdd, 0x2d), Srgb::new(0xb5, 0xde, 0x2b),
    Srgb::new(0xb8, 0xde, 0x29), Srgb::new(0xba, 0xde, 0x28), Srgb::new(0xbd, 0xdf, 0x26), Srgb::new(0xc0, 0xdf, 0x25),
    Srgb::new(0xc2, 0xdf, 0x23), Srgb::new(0xc5, 0xe0, 0x21), Srgb::new(0xc8, 0xe0, 0x20), Srgb::new(0xca, 0xe1, 0x1f),
    Srgb::new(0xcd, 0xe1, 0x1d), Srgb::new(0xd0, 0xe1, 0x1c), Srgb::new(0xd2, 0xe2, 0x1b), Srgb::new(0xd5, 0xe2, 0x1a),
    Srgb::new(0xd8, 0xe2, 0x19), Srgb::new(0xda, 0xe3, 0x19), Srgb::new(0xdd, 0xe3, 0x18), Srgb::new(0xdf, 0xe3, 0x18),
    Srgb::new(0xe2, 0xe4, 0x18), Srgb::new(0xe5, 0xe4, 0x19), Srgb::new(0xe7, 0xe4, 0x19), Srgb::new(0xea, 0xe5, 0x1a),
    Srgb::new(0xec, 0xe5, 0x1b), Srgb::new(0xef, 0xe5, 0x1c), Srgb::new(0xf1, 0xe5, 0x1d), Srgb::new(0xf4, 0xe6, 0x1e),
    Srgb::new(0xf6, 0xe6, 0x20), Srgb::new(0xf8, 0xe6, 0x21), Srgb::new(0xfb, 0xe7, 0x23), Srgb::new(0xfd, 0xe7, 0x25),
];

#[rustfmt::skip]
pub const PLASMA: &[Srgb<u8>] = &[
    Srgb::new(0x0d, 0x08, 0x87), Srgb::new(0x10, 0x07, 0x88), Srgb::new(0x13, 0x07, 0x89), Srgb::new(0x16, 0x07, 0x8a),
    Srgb::new(0x19, 0x06, 0x8c), Srgb::new(0x1b, 0x06, 0x8d), Srgb::new(0x1d, 0x06, 0x8e), Srgb::new(0x20, 0x06, 0x8f),
    Srgb::new(0x22, 0x06, 0x90), Srgb::new(0x24, 0x06, 0x91), Srgb::new(0x26, 0x05, 0x91), Srgb::new(0x28, 0x05, 0x92),
    Srgb::new(0x2a, 0x05, 0x93), Srgb::new(0x2c, 0x05, 0x94), Srgb::new(0x2e, 0x05, 0x95), Srgb::new(0x2f, 0x05, 0x96),
    Srgb::new(0x31, 0x05, 0x97), Srgb::new(0x33, 0x05, 0x97), Srgb::new(0x35, 0x04, 0x98), Srgb::new(0x37, 0x04, 0x99),
    Srgb::new(0x38, 0x04, 0x9a), Srgb::new(0x3a, 0x04, 0x9a), Srgb::new(0x3c, 0x04, 0x9b), Srgb::new(0x3e, 0x04, 0x9c),
    Srgb::new(0x3f, 0x04, 0x9c), Srgb::new(0x41, 0x04, 0x9d), Srgb::new(0x43, 0x03, 0x9e), Srgb::new(0x44, 0x03, 0x9e),
    Srgb::new(0x46, 0x03, 0x9f), Srgb::new(0x48, 0x03, 0x9f), Srgb::new(0x49, 0x03, 0xa0), Srgb::new(0x4b, 0x03, 0xa1),
    Srgb::new(0x4c, 0x02, 0xa1), Srgb::new(0x4e, 0x02, 0xa2), Srgb::new(0x50, 0x02, 0xa2), Srgb::new(0x51, 0x02, 0xa3),
    Srgb::new(0x53, 0x02, 0xa3), Srgb::new(0x55, 0x02, 0xa4), Srgb::new(0x56, 0x01, 0xa4), Srgb::new(0x58, 0x01, 0xa4),
    Srgb::new(0x59, 0x01, 0xa5), Srgb::new(0x5b, 0x01, 0xa5), Srgb::new(0x5c, 0x01, 0xa6), Srgb::new(0x5e, 0x01, 0xa6),
    Srgb::new(0x60, 0x01, 0xa6), Srgb::new(0x61, 0x00, 0xa7), Srgb::new(0x63, 0x00, 0xa7), Srgb::new(0x64, 0x00, 0xa7),
    Srgb::new(0x66, 0x00, 0xa7), Srgb::new(0x67, 0x00, 0xa8), Srgb::new(0x69, 0x00, 0xa8), Srgb::new(0x6a, 0x00, 0xa8),
    Srgb::new(0x6c, 0x00, 0xa8), Srgb::new(0x6e, 0x00, 0xa8), Srgb::new(0x6f, 0x00, 0xa8), Srgb::new(0x71, 0x00, 0xa8),
    Srgb::new(0x72, 0x01, 0xa8), Srgb::new(0x74, 0x01, 0xa8), Srgb::new(0x75, 0x01, 0xa8), Srgb::new(0x77, 0x01, 0xa8),
    Srgb::new(0x78, 0x01, 0xa8), Srgb::new(0x7a, 0x02, 0xa8), Srgb::new(0x7b, 0x02, 0xa8), Srgb::new(0x7d, 0x03, 0xa8),
    Srgb::new(0x7e, 0x03, 0xa8), Srgb::new(0x80, 0x04, 0xa8), Srgb::new(0x81, 0x04, 0xa7), Srgb::new(0x83, 0x05, 0xa7),
    Srgb::new(0x84, 0x05, 0xa7), Srgb::new(0x86, 0x06, 0xa6), Srgb::new(0x87, 0x07, 0xa6), Srgb::new(0x88, 0x08, 0xa6),
    Srgb::new(0x8a, 0x09, 0xa5), Srgb::new(0x8b, 0x0a, 0xa5), Srgb::new(0x8d, 0x0b, 0xa5), Srgb::new(0x8e, 0x0c, 0xa4),
    Srgb::new(0x8f, 0x0d, 0xa4), Srgb::new(0x91, 0x0e, 0xa3), Srgb::new(0x92, 0x0f, 0xa3), Srgb::new(0x94, 0x10, 0xa2),
    Srgb::new(0x95, 0x11, 0xa1), Srgb::new(0x96, 0x13, 0xa1), Srgb::new(0x98, 0x14, 0xa0), Srgb::new(0x99, 0x15, 0x9f),
    Srgb::new(0x9a, 0x16, 0x9f), Srgb::new(0x9c, 0x17, 0x9e), Srgb::new(0x9d, 0x18, 0x9d), Srgb::new(0x9e, 0x19, 0x9d),
    Srgb::new(0xa0, 0x1a, 0x9c), Srgb::new(0xa1, 0x1b, 0x9b), Srgb::new(0xa2, 0x1d, 0x9a), Srgb::new(0xa3, 0x1e, 0x9a),
    Srgb::new(0xa5, 0x1f, 0x99), Srgb::new(0xa6, 0x20, 0x98), Srgb::new(0xa7, 0x21, 0x97), Srgb::new(0xa8, 0x22, 0x96),
    Srgb::new(0xaa, 0x23, 0x95), Srgb::new(0xab, 0x24, 0x94), Srgb::new(0xac, 0x26, 0x94), Srgb::new(0xad, 0x27, 0x93),
    Srgb::new(0xae, 0x28, 0x92), Srgb::new(0xb0, 0x29, 0x91), Srgb::new(0xb1, 0x2a, 0x90), Srgb::new(0xb2, 0x2b, 0x8f),
    Srgb::new(0xb3, 0x2c, 0x8e), Srgb::new(0xb4, 0x2e, 0x8d), Srgb::new(0xb5, 0x2f, 0x8c), Srgb::new(0xb6, 0x30, 0x8b),
    Srgb::new(0xb7, 0x31, 0x8a), Srgb::new(0xb8, 0x32, 0x89), Srgb::new(0xba, 0x33, 0x88), Srgb::new(0xbb, 0x34, 0x88),
    Srgb::new(0xbc, 0x35, 0x87), Srgb::new(0xbd, 0x37, 0x86), Srgb::new(0xbe, 0x38, 0x85), Srgb::new(0xbf, 0x39, 0x84),
    Srgb::new(0xc0, 0x3a, 0x83), Srgb::new(0xc1, 0x3b, 0x82), Srgb::new(0xc2, 0x3c, 0x81), Srgb::new(0xc3, 0x3d, 0x80),
    Srgb::new(0xc4, 0x3e, 0x7f), Srgb::new(0xc5, 0x40, 0x7e), Srgb::new(0xc6, 0x41, 0x7d), Srgb::new(0xc7, 0x42, 0x7c),
    Srgb::new(0xc8, 0x43, 0x7b), Srgb::new(0xc9, 0x44, 0x7a), Srgb::new(0xca, 0x45, 0x7a), Srgb::new(0xcb, 0x46, 0x79),
    Srgb::new(0xcc, 0x47, 0x78), Srgb::new(0xcc, 0x49, 0x77), Srgb::new(0xcd, 0x4a, 0x76), Srgb::new(0xce, 0x4b, 0x75),
    Srgb::new(0xcf, 0x4c, 0x74), Srgb::new(0xd0, 0x4d, 0x73), Srgb::new(0xd1, 0x4e, 0x72), Srgb::new(0xd2, 0x4f, 0x71),
    Srgb::new(0xd3, 0x51, 0x71), Srgb::new(0xd4, 0x52, 0x70), Srgb::new(0xd5, 0x53, 0x6f), Srgb::new(0xd5, 0x54, 0x6e),
    Srgb::new(0xd6, 0x55, 0x6d), Srgb::new(0xd7, 0x56, 0x6c), Srgb::new(0xd8, 0x57, 0x6b), Srgb::new(0xd9, 0x58, 0x6a),
    Srgb::new(0xda, 0x5a, 0x6a), Srgb::new(0xda, 0x5b, 0x69), Srgb::new(0xdb, 0x5c, 0x68), Srgb::new(0xdc, 0x5d, 0x67),
    Srgb::new(0xdd, 0x5e, 0x66), Srgb::new(0xde, 0x5f, 0x65), Srgb::new(0xde, 0x61, 0x64), Srgb::new(0xdf, 0x62, 0x63),
    Srgb::new(0xe0, 0x63, 0x63), Srgb::new(0xe1, 0x64, 0x62), Srgb::new(0xe2, 0x65, 0x61), Srgb::new(0xe2, 0x66, 0x60),
    Srgb::new(0xe3, 0x68, 0x5f), Srgb::new(0xe4, 0x69, 0x5e), Srgb::new(0xe5, 0x6a, 0x5d), Srgb::new(0xe5, 0x6b, 0x5d),
    Srgb::new(0xe6, 0x6c, 0x5c), Srgb::new(0xe7, 0x6e, 0x5b), Srgb::new(0xe7, 0x6f, 0x5a), Srgb::new(0xe8, 0x70, 0x59),
    Srgb::new(0xe9, 0x71, 0x58), Srgb::new(0xe9, 0x72, 0x57), Srgb::new(0xea, 0x74, 0x57), Srgb::new(0xeb, 0x75, 0x56),
    Srgb::new(0xeb, 0x76, 0x55), Srgb::new(0xec, 0x77, 0x54), Srgb::new(0xed, 0x79, 0x53), Srgb::new(0xed, 0x7a, 0x52),
    Srgb::new(0xee, 0x7b, 0x51), Srgb::new(0xef, 0x7c, 0x51), Srgb::new(0xef, 0x7e, 0x50), Srgb::new(0xf0, 0x7f, 0x4f),
    Srgb::new(0xf0, 0x80, 0x4e), Srgb::new(0xf1, 0x81, 0x4d), Srgb::new(0xf1, 0x83, 0x4c), Srgb::new(0xf2, 0x84, 0x4b),
    Srgb::new(0xf3, 0x85, 0x4b), Srgb::new(0xf3, 0x87, 0x4a), Srgb::new(0xf4, 0x88, 0x49), Srgb::new(0xf4, 0x89, 0x48),
    Srgb::new(0xf5, 0x8b, 0x47), Srgb::new(0xf5, 0x8c, 0x46), Srgb::new(0xf6, 0x8d, 0x45), Srgb::new(0xf6, 0x8f, 0x44),
    Srgb::new(0xf7, 0x90, 0x44), Srgb::new(0xf7, 0x91, 0x43), Srgb::new(0xf7, 0x93, 0x42), Srgb::new(0xf8, 0x94, 0x41),
    Srgb::new(0xf8, 0x95, 0x40), Srgb::new(0xf9, 0x97, 0x3f), Srgb::new(0xf9, 0x98, 0x3e), Srgb::new(0xf9, 0x9a, 0x3e),
    Srgb::new(0xfa, 0x9b, 0x3d), Srgb::new(0xfa, 0x9c, 0x3c), Srgb::new(0xfa, 0x9e, 0x3b), Srgb::new(0xfb, 0x9f, 0x3a),
    Srgb::new(0xfb, 0xa1, 0x39), Srgb::new(0xfb, 0xa2, 0x38), Srgb::new(0xfc, 0xa3, 0x38), Srgb::new(0xfc, 0xa5, 0x37),
    Srgb::new(0xfc, 0xa6, 0x36), Srgb::new(0xfc, 0xa8, 0x35), Srgb::new(0xfc, 0xa9, 0x34), Srgb::new(0xfd, 0xab, 0x33),
    Srgb::new(0xfd, 0xac, 0x33), Srgb::new(0xfd, 0xae, 0x32), Srgb::new(0xfd, 0xaf, 0x31), Srgb::new(0xfd, 0xb1, 0x30),
    Srgb::new(0xfd, 0xb2, 0x2f), Srgb::new(0xfd, 0xb4, 0x2f), Srgb::new(0xfd, 0xb5, 0x2e), Srgb::new(0xfe, 0xb7, 0x2d),
    Srgb::new(0xfe, 0xb8, 0x2c), Srgb::new(0xfe, 0xba, 0x2c), Srgb::new(0xfe, 0xbb, 0x2b), Srgb::new(0xfe, 0xbd, 0x2a),
    Srgb::new(0xfe, 0xbe, 0x2a), Srgb::new(0xfe, 0xc0, 0x29), Srgb::new(0xfd, 0xc2, 0x29), Srgb::new(0xfd, 0xc3, 0x28),
    Srgb::new(0xfd, 0xc5, 0x27), Srgb::new(0xfd, 0xc6, 0x27), Srgb::new(0xfd, 0xc8, 0x27), Srgb::new(0xfd, 0xca, 0x26),
    Srgb::new(0xfd, 0xcb, 0x26), Srgb::new(0xfc, 0xcd, 0x25), Srgb::new(0xfc, 0xce, 0x25), Srgb::new(0xfc, 0xd0, 0x25),
    Srgb::new(0xfc, 0xd2, 0x25), Srgb::new(0xfb, 0xd3, 0x24), Srgb::new(0xfb, 0xd5, 0x24), Srgb::new(0xfb, 0xd7, 0x24),
    Srgb::new(0xfa, 0xd8, 0x24), Srgb::new(0xfa, 0xda, 0x24), Srgb::new(0xf9, 0xdc, 0x24), Srgb::new(0xf9, 0xdd, 0x25),
    Srgb::new(0xf8, 0xdf, 0x25), Srgb::new(0xf8, 0xe1, 0x25), Srgb::new(0xf7, 0xe2, 0x25), Srgb::new(0xf7, 0xe4, 0x25),
    Srgb::new(0xf6, 0xe6, 0x26), Srgb::new(0xf6, 0xe8, 0x26), Srgb::new(0xf5, 0xe9, 0x26), Srgb::new(0xf5, 0xeb, 0x27),
    Srgb::new(0xf4, 0xed, 0x27), Srgb::new(0xf3, 0xee, 0x27), Srgb::new(0xf3, 0xf0, 0x27), Srgb::new(0xf2, 0xf2, 0x27),
    Srgb::new(0xf1, 0xf4, 0x26), Srgb::new(0xf1, 0xf5, 0x25), Srgb::new(0xf0, 0xf7, 0x24), Srgb::new(0xf0, 0xf9, 0x21),
];

#[rustfmt::skip]
pub const INFERNO: &[Srgb<u8>] = &[
    Srgb::new(0x00, 0x00, 0x04), Srgb::new(0x01, 0x00, 0x05), Srgb::new(0x01, 0x01, 0x06), Srgb::new(0x01, 0x01, 0x08),
    Srgb::new(0x02, 0x01, 0x0a), Srgb::new(0x02, 0x02, 0x0c), Srgb::new(0x02, 0x02, 0x0e), Srgb::new(0x03, 0x02, 0x10),
    Srgb::new(0x04, 0x03, 0x12), Srgb::new(0x04, 0x03, 0x14), Srgb::new(0x05, 0x04, 0x17), Srgb::new(0x06, 0x04, 0x19),
    Srgb::new(0x07, 0x05, 0x1b), Srgb::new(0x08, 0x05, 0x1d), Srgb::new(0x09, 0x06, 0x1f), Srgb::new(0x0a, 0x07, 0x22),
    Srgb::new(0x0b, 0x07, 0x24), Srgb::new(0x0c, 0x08, 0x26), Srgb::new(0x0d, 0x08, 0x29), Srgb::new(0x0e, 0x09, 0x2b),
    Srgb::new(0x10, 0x09, 0x2d), Srgb::new(0x11, 0x0a, 0x30), Srgb::new(0x12, 0x0a, 0x32), Srgb::new(0x14, 0x0b, 0x34),
    Srgb::new(0x15, 0x0b, 0x37), Srgb::new(0x16, 0x0b, 0x39), Srgb::new(0x18, 0x0c, 0x3c), Srgb::new(0x19, 0x0c, 0x3e),
    Srgb::new(0x1b, 0x0c, 0x41), Srgb::new(0x1c, 0x0c, 0x43), Srgb::new(0x1e, 0x0c, 0x45), Srgb::new(0x1f, 0x0c, 0x48),
    Srgb::new(0x21, 0x0c, 0x4a), Srgb::new(0x23, 0x0c, 0x4c), Srgb::new(0x24, 0x0c, 0x4f), Srgb::new(0x26, 0x0c, 0x51),
    Srgb::new(0x28, 0x0b, 0x53), Srgb::new(0x29, 0x0b, 0x55), Srgb::new(0x2b, 0x0b, 0x57), Srgb::new(0x2d, 0x0b, 0x59),
    Srgb::new(0x2f, 0x0a, 0x5b), Srgb::new(0x31, 0x0a, 0x5c), Srgb::new(0x32, 0x0a, 0x5e), Srgb::new(0x34, 0x0a, 0x5f),
    Srgb::new(0x36, 0x09, 0x61), Srgb::new(0x38, 0x09, 0x62), Srgb::new(0x39, 0x09, 0x63), Srgb::new(0x3b, 0x09, 0x64),
    Srgb::new(0x3d, 0x09, 0x65), Srgb::new(0x3e, 0x09, 0x66), Srgb::new(0x40, 0x0a, 0x67), Srgb::new(0x42, 0x0a, 0x68),
    Srgb::new(0x44, 0x0a, 0x68), Srgb::new(0x45, 0x0a, 0x69), Srgb::new(0x47, 0x0b, 0x6a), Srgb::new(0x49, 0x0b, 0x6a),
    Srgb::new(0x4a, 0x0c, 0x6b), Srgb::new(0x4c, 0x0c, 0x6b), Srgb::new(0x4d, 0x0d, 0x6c), Srgb::new(0x4f, 0x0d, 0x6c),
    Srgb::new(0x51, 0x0e, 0x6c), Srgb::new(0x52, 0x0e, 0x6d), Srgb::new(0x54, 0x0f, 0x6d), Srgb::new(0x55, 0x0f, 0x6d),
    Srgb::new(0x57, 0x10, 0x6e), Srgb::new(0x59, 0x10, 0x6e), Srgb::new(0x5a, 0x11, 0x6e), Srgb::new(0x5c, 0x12, 0x6e),
    Srgb::new(0x5d, 0x12, 0x6e), Srgb::new(0x5f, 0x13, 0x6e), Srgb::new(0x61, 0x13, 0x6e), Srgb::new(0x62, 0x14, 0x6e),
    Srgb::new(0x64, 0x15, 0x6e), Srgb::new(0x65, 0x15, 0x6e), Srgb::new(0x67, 0x16, 0x6e), Srgb::new(0x69, 0x16, 0x6e),
    Srgb::new(0x6a, 0x17, 0x6e), Srgb::new(0x6c, 0x18, 0x6e), Srgb::new(0x6d, 0x18, 0x6e), Srgb::new(0x6f, 0x19, 0x6e),
    Srgb::new(0x71, 0x19, 0x6e), Srgb::new(0x72, 0x1a, 0x6e), Srgb::new(0x74, 0x1a, 0x6e), Srgb::new(0x75, 0x1b, 0x6e),
    Srgb::new(0x77, 0x1c, 0x6d), Srgb::new(0x78, 0x1c, 0x6d), Srgb::new(0x7a, 0x1d, 0x6d), Srgb::new(0x7c, 0x1d, 0x6d),
    Srgb::new(0x7d, 0x1e, 0x6d), Srgb::new(0x7f, 0x1e, 0x6c), Srgb::new(0x80, 0x1f, 0x6c), Srgb::new(0x82, 0x20, 0x6c),
    Srgb::new(0x84, 0x20, 0x6b), Srgb::new(0x85, 0x21, 0x6b), Srgb::new(0x87, 0x21, 0x6b), Srgb::new(0x88, 0x22, 0x6a),
    Srgb::new(0x8a, 0x22, 0x6a), Srgb::new(0x8c, 0x23, 0x69), Srgb::new(0x8d, 0x23, 0x69), Srgb::new(0x8f, 0x24, 0x69),
    Srgb::new(0x90, 0x25, 0x68), Srgb::new(0x92, 0x25, 0x68), Srgb::new(0x93, 0x26, 0x67), Srgb::new(0x95, 0x26, 0x67),
    Srgb::new(0x97, 0x27, 0x66), Srgb::new(0x98, 0x27, 0x66), Srgb::new(0x9a, 0x28, 0x65), Srgb::new(0x9b, 0x29, 0x64),
    Srgb::new(0x9d, 0x29, 0x64), Srgb::new(0x9f, 0x2a, 0x63), Srgb::new(0xa0, 0x2a, 0x63), Srgb::new(0xa2, 0x2b, 0x62),
    Srgb::new(0xa3, 0x2c, 0x61), Srgb::new(0xa5, 0x2c, 0x60), Srgb::new(0xa6, 0x2d, 0x60), Srgb::new(0xa8, 0x2e, 0x5f),
    Srgb::new(0xa9, 0x2e, 0x5e), Srgb::new(0xab, 0x2f, 0x5e), Srgb::new(0xad, 0x30, 0x5d), Srgb::new(0xae, 0x30, 0x5c),
    Srgb::new(0xb0, 0x31, 0x5b), Srgb::new(0xb1, 0x32, 0x5a), Srgb::new(0xb3, 0x32, 0x5a), Srgb::new(0xb4, 0x33, 0x59),
    Srgb::new(0xb6, 0x34, 0x58), Srgb::new(0xb7, 0x35, 0x57), Srgb::new(0xb9, 0x35, 0x56), Srgb::new(0xba, 0x36, 0x55),
    Srgb::new(0xbc, 0x37, 0x54), Srgb::new(0xbd, 0x38, 0x53), Srgb::new(0xbf, 0x39, 0x52), Srgb::new(0xc0, 0x3a, 0x51),
    Srgb::new(0xc1, 0x3a, 0x50), Srgb::new(0xc3, 0x3b, 0x4f), Srgb::new(0xc4, 0x3c, 0x4e), Srgb::new(0xc6, 0x3d, 0x4d),
    Srgb::new(0xc7, 0x3e, 0x4c), Srgb::new(0xc8, 0x3f, 0x4b), Srgb::new(0xca, 0x40, 0x4a), Srgb::new(0xcb, 0x41, 0x49),
    Srgb::new(0xcc, 0x42, 0x48), Srgb::new(0xce, 0x43, 0x47), Srgb::new(0xcf, 0x44, 0x46), Srgb::new(0xd0, 0x45, 0x45),
    Srgb::new(0xd2, 0x46, 0x44), Srgb::new(0xd3, 0x47, 0x43), Srgb::new(0xd4, 0x48, 0x42), Srgb::new(0xd5, 0x4a, 0x41),
    Srgb::new(0xd7, 0x4b, 0x3f), Srgb::new(0xd8, 0x4c, 0x3e), Srgb::new(0xd9, 0x4d, 0x3d), Srgb::new(0xda, 0x4e, 0x3c),
    Srgb::new(0xdb, 0x50, 0x3b), Srgb::new(0xdd, 0x51, 0x3a), Srgb::new(0xde, 0x52, 0x38), Srgb::new(0xdf, 0x53, 0x37),
    Srgb::new(0xe0, 0x55, 0x36), Srgb::new(0xe1, 0x56, 0x35), Srgb::new(0xe2, 0x57, 0x34), Srgb::new(0xe3, 0x59, 0x33),
    Srgb::new(0xe4, 0x5a, 0x31), Srgb::new(0xe5, 0x5c, 0x30), Srgb::new(0xe6, 0x5d, 0x2f), Srgb::new(0xe7, 0x5e, 0x2e),
    Srgb::new(0xe8, 0x60, 0x2d), Srgb::new(0xe9, 0x61, 0x2b), Srgb::new(0xea, 0x63, 0x2a), Srgb::new(0xeb, 0x64, 0x29),
    Srgb::new(0xeb, 0x66, 0x28), Srgb::new(0xec, 0x67, 0x26), Srgb::new(0xed, 0x69, 0x25), Srgb::new(0xee, 0x6a, 0x24),
    Srgb::new(0xef, 0x6c, 0x23), Srgb::new(0xef, 0x6e, 0x21), Srgb::new(0xf0, 0x6f, 0x20), Srgb::new(0xf1, 0x71, 0x1f),
    Srgb::new(0xf1, 0x73, 0x1d), Srgb::new(0xf2, 0x74, 0x1c), Srgb::new(0xf3, 0x76, 0x1b), Srgb::new(0xf3, 0x78, 0x19),
    Srgb::new(0xf4, 0x79, 0x18), Srgb::new(0xf5, 0x7b, 0x17), Srgb::new(0xf5, 0x7d, 0x15), Srgb::new(0xf6, 0x7e, 0x14),
    Srgb::new(0xf6, 0x80, 0x13), Srgb::new(0xf7, 0x82, 0x12), Srgb::new(0xf7, 0x84, 0x10), Srgb::new(0xf8, 0x85, 0x0f),
    Srgb::new(0xf8, 0x87, 0x0e), Srgb::new(0xf8, 0x89, 0x0c), Srgb::new(0xf9, 0x8b, 0x0b), Srgb::new(0xf9, 0x8c, 0x0a),
    Srgb::new(0xf9, 0x8e, 0x09), Srgb::new(0xfa, 0x90, 0x08), Srgb::new(0xfa, 0x92, 0x07), Srgb::new(0xfa, 0x94, 0x07),
    Srgb::new(0xfb, 0x96, 0x06), Srgb::new(0xfb, 0x97, 0x06), Srgb::new(0xfb, 0x99, 0x06), Srgb::new(0xfb, 0x9b, 0x06),
    Srgb::new(0xfb, 0x9d, 0x07), Srgb::new(0xfc, 0x9f, 0x07), Srgb::new(0xfc, 0xa1, 0x08), Srgb::new(0xfc, 0xa3, 0x09),
    Srgb::new(0xfc, 0xa5, 0x0a), Srgb::new(0xfc, 0xa6, 0x0c), Srgb::new(0xfc, 0xa8, 0x0d), Srgb::new(0xfc, 0xaa, 0x0f),
    Srgb::new(0xfc, 0xac, 0x11), Srgb::new(0xfc, 0xae, 0x12), Srgb::new(0xfc, 0xb0, 0x14), Srgb::new(0xfc, 0xb2, 0x16),
    Srgb::new(0xfc, 0xb4, 0x18), Srgb::new(0xfb, 0xb6, 0x1a), Srgb::new(0xfb, 0xb8, 0x1d), Srgb::new(0xfb, 0xba, 0x1f),
    Srgb::new(0xfb, 0xbc, 0x21), Srgb::new(0xfb, 0xbe, 0x23), Srgb::new(0xfa, 0xc0, 0x26), Srgb::new(0xfa, 0xc2, 0x28),
    Srgb::new(0xfa, 0xc4, 0x2a), Srgb::new(0xfa, 0xc6, 0x2d), Srgb::new(0xf9, 0xc7, 0x2f), Srgb::new(0xf9, 0xc9, 0x32),
    Srgb::new(0xf9, 0xcb, 0x35), Srgb::new(0xf8, 0xcd, 0x37), Srgb::new(0xf8, 0xcf, 0x3a), Srgb::new(0xf7, 0xd1, 0x3d),
    Srgb::new(0xf7, 0xd3, 0x40), Srgb::new(0xf6, 0xd5, 0x43), Srgb::new(0xf6, 0xd7, 0x46), Srgb::new(0xf5, 0xd9, 0x49),
    Srgb::new(0xf5, 0xdb, 0x4c), Srgb::new(0xf4, 0xdd, 0x4f), Srgb::new(0xf4, 0xdf, 0x53), Srgb::new(0xf4, 0xe1, 0x56),
    Srgb::new(0xf3, 0xe3, 0x5a), Srgb::new(0xf3, 0xe5, 0x5d), Srgb::new(0xf2, 0xe6, 0x61), Srgb::new(0xf2, 0xe8, 0x65),
    Srgb::new(0xf2, 0xea, 0x69), Srgb::new(0xf1, 0xec, 0x6d), Srgb::new(0xf1, 0xed, 0x71), Srgb::new(0xf1, 0xef, 0x75),
    Srgb::new(0xf1, 0xf1, 0x79), Srgb::new(0xf2, 0xf2, 0x7d), Srgb::new(0xf2, 0xf4, 0x82), Srgb::new(0xf3, 0xf5, 0x86),
    Srgb::new(0xf3, 0xf6, 0x8a), Srgb::new(0xf4, 0xf8, 0x8e), Srgb::new(0xf5, 0xf9, 0x92), Srgb::new(0xf6, 0xfa, 0x96),
    Srgb::new(0xf8, 0xfb, 0x9a), Srgb::new(0xf9, 0xfc, 0x9d), Srgb::new(0xfa, 0xfd, 0xa1), Srgb::new(0xfc, 0xff, 0xa4),
];

#[rustfmt::skip]
pub const MAGMA: &[Srgb<u8>] = &[
    Srgb::new(0x00, 0x00, 0x04), Srgb::new(0x01, 0x00, 0x05), Srgb::new(0x01, 0x01, 0x06), Srgb::new(0x01, 0x01, 0x08),
    Srgb::new(0x02, 0x01, 0x09), Srgb::new(0x02, 0x02, 0x0b), Srgb::new(0x02, 0x02, 0x0d), Srgb::new(0x03, 0x03, 0x0f),
    Srgb::new(0x03, 0x03, 0x12), Srgb::new(0x04, 0x04, 0x14), Srgb::new(0x05, 0x04, 0x16), Srgb::new(0x06, 0x05, 0x18),
    Srgb::new(0x06, 0x05, 0x1a), Srgb::new(0x07, 0x06, 0x1c), Srgb::new(0x08, 0x07, 0x1e), Srgb::new(0x09, 0x07, 0x20),
    Srgb::new(0x0a, 0x08, 0x22), Srgb::new(0x0b, 0x09, 0x24), Srgb::new(0x0c, 0x09, 0x26), Srgb::new(0x0d, 0x0a, 0x29),
    Srgb::new(0x0e, 0x0b, 0x2b), Srgb::new(0x10, 0x0b, 0x2d), Srgb::new(0x11, 0x0c, 0x2f), Srgb::new(0x12, 0x0d, 0x31),
    Srgb::new(0x13, 0x0d, 0x34), Srgb::new(0x14, 0x0e, 0x36), Srgb::new(0x15, 0x0e, 0x38), Srgb::new(0x16, 0x0f, 0x3b),
    Srgb::new(0x18, 0x0f, 0x3d), Srgb::new(0x19, 0x10, 0x3f), Srgb::new(0x1a, 0x10, 0x42), Srgb::new(0x1c, 0x10, 0x44),
    Srgb::new(0x1d, 0x11, 0x47), Srgb::new(0x1e, 0x11, 0x49), Srgb::new(0x20, 0x11, 0x4b), Srgb::new(0x21, 0x11, 0x4e),
    Srgb::new(0x22, 0x11, 0x50), Srgb::new(0x24, 0x12, 0x53), Srgb::new(0x25, 0x12, 0x55), Srgb::new(0x27, 0x12, 0x58),
    Srgb::new(0x29, 0x11, 0x5a), Srgb::new(0x2a, 0x11, 0x5c), Srgb::new(0x2c, 0x11, 0x5f), Srgb::new(0x2d, 0x11, 0x61),
    Srgb::new(0x2f, 0x11, 0x63), Srgb::new(0x31, 0x11, 0x65), Srgb::new(0x33, 0x10, 0x67), Srgb::new(0x34, 0x10, 0x69),
    Srgb::new(0x36, 0x10, 0x6b), Srgb::new(0x38, 0x10, 0x6c), Srgb::new(0x39, 0x0f, 0x6e), Srgb::new(0x3b, 0x0f, 0x70),
    Srgb::new(0x3d, 0x0f, 0x71), Srgb::new(0x3f, 0x0f, 0x72), Srgb::new(0x40, 0x0f, 0x74), Srgb::new(0x42, 0x0f, 0x75),
    Srgb::new(0x44, 0x0f, 0x76), Srgb::new(0x45, 0x10, 0x77), Srgb::new(0x47, 0x10, 0x78), Srgb::new(0x49, 0x10, 0x78),
    Srgb::new(0x4a, 0x10, 0x79), Srgb::new(0x4c, 0x11, 0x7a), Srgb::new(0x4e, 0x11, 0x7b), Srgb::new(0x4f, 0x12, 0x7b),
    Srgb::new(0x51, 0x12, 0x7c), Srgb::new(0x52, 0x13, 0x7c), Srgb::new(0x54, 0x13, 0x7d), Srgb::new(0x56, 0x14, 0x7d),
    Srgb::new(0x57, 0x15, 0x7e), Srgb::new(0x59, 0x15, 0x7e), Srgb::new(0x5a, 0x16, 0x7e), Srgb::new(0x5c, 0x16, 0x7f),
    Srgb::new(0x5d, 0x17, 0x7f), Srgb::new(0x5f, 0x18, 0x7f), Srgb::new(0x60, 0x18, 0x80), Srgb::new(0x62, 0x19, 0x80),
    Srgb::new(0x64, 0x1a, 0x80), Srgb::new(0x65, 0x1a, 0x80), Srgb::new(0x67, 0x1b, 0x80), Srgb::new(0x68, 0x1c, 0x81),
    Srgb::new(0x6a, 0x1c, 0x81), Srgb::new(0x6b, 0x1d, 0x81), Srgb::new(0x6d, 0x1d, 0x81), Srgb::new(0x6e, 0x1e, 0x81),
    Srgb::new(0x70, 0x1f, 0x81), Srgb::new(0x72, 0x1f, 0x81), Srgb::new(0x73, 0x20, 0x81), Srgb::new(0x75, 0x21, 0x81),
    Srgb::new(0x76, 0x21, 0x81), Srgb::new(0x78, 0x22, 0x81), Srgb::new(0x79, 0x22, 0x82), Srgb::new(0x7b, 0x23, 0x82),
    Srgb::new(0x7c, 0x23, 0x82), Srgb::new(0x7e, 0x24, 0x82), Srgb::new(0x80, 0x25, 0x82), Srgb::new(0x81, 0x25, 0x81),
    Srgb::new(0x83, 0x26, 0x81), Srgb::new(0x84, 0x26, 0x81), Srgb::new(0x86, 0x27, 0x81), Srgb::new(0x88, 0x27, 0x81),
    Srgb::new(0x89, 0x28, 0x81), Srgb::new(0x8b, 0x29, 0x81), Srgb::new(0x8c, 0x29, 0x81), Srgb::new(0x8e, 0x2a, 0x81),
    Srgb::new(0x90, 0x2a, 0x81), Srgb::new(0x91, 0x2b, 0x81), Srgb::new(0x93, 0x2b, 0x80), Srgb::new(0x94, 0x2c, 0x80),
    Srgb::new(0x96, 0x2c, 0x80), Srgb::new(0x98, 0x2d, 0x80), Srgb::new(0x99, 0x2d, 0x80), Srgb::new(0x9b, 0x2e, 0x7f),
    Srgb::new(0x9c, 0x2e, 0x7f), Srgb::new(0x9e, 0x2f, 0x7f), Srgb::new(0xa0, 0x2f, 0x7f), Srgb::new(0xa1, 0x30, 0x7e),
    Srgb::new(0xa3, 0x30, 0x7e), Srgb::new(0xa5, 0x31, 0x7e), Srgb::new(0xa6, 0x31, 0x7d), Srgb::new(0xa8, 0x32, 0x7d),
    Srgb::new(0xaa, 0x33, 0x7d), Srgb::new(0xab, 0x33, 0x7c), Srgb::new(0xad, 0x34, 0x7c), Srgb::new(0xae, 0x34, 0x7b),
    Srgb::new(0xb0, 0x35, 0x7b), Srgb::new(0xb2, 0x35, 0x7b), Srgb::new(0xb3, 0x36, 0x7a), Srgb::new(0xb5, 0x36, 0x7a),
    Srgb::new(0xb7, 0x37, 0x79), Srgb::new(0xb8, 0x37, 0x79), Srgb::new(0xba, 0x38, 0x78), Srgb::new(0xbc, 0x39, 0x78),
    Srgb::new(0xbd, 0x39, 0x77), Srgb::new(0xbf, 0x3a, 0x77), Srgb::new(0xc0, 0x3a, 0x76), Srgb::new(0xc2, 0x3b, 0x75),
    Srgb::new(0xc4, 0x3c, 0x75), Srgb::new(0xc5, 0x3c, 0x74), Srgb::new(0xc7, 0x3d, 0x73), Srgb::new(0xc8, 0x3e, 0x73),
    Srgb::new(0xca, 0x3e, 0x72), Srgb::new(0xcc, 0x3f, 0x71), Srgb::new(0xcd, 0x40, 0x71), Srgb::new(0xcf, 0x40, 0x70),
    Srgb::new(0xd0, 0x41, 0x6f), Srgb::new(0xd2, 0x42, 0x6f), Srgb::new(0xd3, 0x43, 0x6e), Srgb::new(0xd5, 0x44, 0x6d),
    Srgb::new(0xd6, 0x45, 0x6c), Srgb::new(0xd8, 0x45, 0x6c), Srgb::new(0xd9, 0x46, 0x6b), Srgb::new(0xdb, 0x47, 0x6a),
    Srgb::new(0xdc, 0x48, 0x69), Srgb::new(0xde, 0x49, 0x68), Srgb::new(0xdf, 0x4a, 0x68), Srgb::new(0xe0, 0x4c, 0x67),
    Srgb::new(0xe2, 0x4d, 0x66), Srgb::new(0xe3, 0x4e, 0x65), Srgb::new(0xe4, 0x4f, 0x64), Srgb::new(0xe5, 0x50, 0x64),
    Srgb::new(0xe7, 0x52, 0x63), Srgb::new(0xe8, 0x53, 0x62), Srgb::new(0xe9, 0x54, 0x62), Srgb::new(0xea, 0x56, 0x61),
    Srgb::new(0xeb, 0x57, 0x60), Srgb::new(0xec, 0x58, 0x60), Srgb::new(0xed, 0x5a, 0x5f), Srgb::new(0xee, 0x5b, 0x5e),
    Srgb::new(0xef, 0x5d, 0x5e), Srgb::new(0xf0, 0x5f, 0x5e), Srgb::new(0xf1, 0x60, 0x5d), Srgb::new(0xf2, 0x62, 0x5d),
    Srgb::new(0xf2, 0x64, 0x5c), Srgb::new(0xf3, 0x65, 0x5c), Srgb::new(0xf4, 0x67, 0x5c), Srgb::new(0xf4, 0x69, 0x5c),
    Srgb::new(0xf5, 0x6b, 0x5c), Srgb::new(0xf6, 0x6c, 0x5c), Srgb::new(0xf6, 0x6e, 0x5c), Srgb::new(0xf7, 0x70, 0x5c),
    Srgb::new(0xf7, 0x72, 0x5c), Srgb::new(0xf8, 0x74, 0x5c), Srgb::new(0xf8, 0x76, 0x5c), Srgb::new(0xf9, 0x78, 0x5d),
    Srgb::new(0xf9, 0x79, 0x5d), Srgb::new(0xf9, 0x7b, 0x5d), Srgb::new(0xfa, 0x7d, 0x5e), Srgb::new(0xfa, 0x7f, 0x5e),
    Srgb::new(0xfa, 0x81, 0x5f), Srgb::new(0xfb, 0x83, 0x5f), Srgb::new(0xfb, 0x85, 0x60), Srgb::new(0xfb, 0x87, 0x61),
    Srgb::new(0xfc, 0x89, 0x61), Srgb::new(0xfc, 0x8a, 0x62), Srgb::new(0xfc, 0x8c, 0x63), Srgb::new(0xfc, 0x8e, 0x64),
    Srgb::new(0xfc, 0x90, 0x65), Srgb::new(0xfd, 0x92, 0x66), Srgb::new(0xfd, 0x94, 0x67), Srgb::new(0xfd, 0x96, 0x68),
    Srgb::new(0xfd, 0x98, 0x69), Srgb::new(0xfd, 0x9a, 0x6a), Srgb::new(0xfd, 0x9b, 0x6b), Srgb::new(0xfe, 0x9d, 0x6c),
    Srgb::new(0xfe, 0x9f, 0x6d), Srgb::new(0xfe, 0xa1, 0x6e), Srgb::new(0xfe, 0xa3, 0x6f), Srgb::new(0xfe, 0xa5, 0x71),
    Srgb::new(0xfe, 0xa7, 0x72), Srgb::new(0xfe, 0xa9, 0x73), Srgb::new(0xfe, 0xaa, 0x74), Srgb::new(0xfe, 0xac, 0x76),
    Srgb::new(0xfe, 0xae, 0x77), Srgb::new(0xfe, 0xb0, 0x78), Srgb::new(0xfe, 0xb2, 0x7a), Srgb::new(0xfe, 0xb4, 0x7b),
    Srgb::new(0xfe, 0xb6, 0x7c), Srgb::new(0xfe, 0xb7, 0x7e), Srgb::new(0xfe, 0xb9, 0x7f), Srgb::new(0xfe, 0xbb, 0x81),
    Srgb::new(0xfe, 0xbd, 0x82), Srgb::new(0xfe, 0xbf, 0x84), Srgb::new(0xfe, 0xc1, 0x85), Srgb::new(0xfe, 0xc2, 0x87),
    Srgb::new(0xfe, 0xc4, 0x88), Srgb::new(0xfe, 0xc6, 0x8a), Srgb::new(0xfe, 0xc8, 0x8c), Srgb::new(0xfe, 0xca, 0x8d),
    Srgb::new(0xfe, 0xcc, 0x8f), Srgb::new(0xfe, 0xcd, 0x90), Srgb::new(0xfe, 0xcf, 0x92), Srgb::new(0xfe, 0xd1, 0x94),
    Srgb::new(0xfe, 0xd3, 0x95), Srgb::new(0xfe, 0xd5, 0x97), Srgb::new(0xfe, 0xd7, 0x99), Srgb::new(0xfe, 0xd8, 0x9a),
    Srgb::new(0xfd, 0xda, 0x9c), Srgb::new(0xfd, 0xdc, 0x9e), Srgb::new(0xfd, 0xde, 0xa0), Srgb::new(0xfd, 0xe0, 0xa1),
    Srgb::new(0xfd, 0xe2, 0xa3), Srgb::new(0xfd, 0xe3, 0xa5), Srgb::new(0xfd, 0xe5, 0xa7), Srgb::new(0xfd, 0xe7, 0xa9),
    Srgb::new(0xfd, 0xe9, 0xaa), Srgb::new(0xfd, 0xeb, 0xac), Srgb::new(0xfc, 0xec, 0xae), Srgb::new(0xfc, 0xee, 0xb0),
    Srgb::new(0xfc, 0xf0, 0xb2), Srgb::new(0xfc, 0xf2, 0xb4), Srgb::new(0xfc, 0xf4, 0xb6), Srgb::new(0xfc, 0xf6, 0xb8),
    Srgb::new(0xfc, 0xf7, 0xb9), Srgb::new(0xfc, 0xf9, 0xbb), Srgb::new(0xfc, 0xfb, 0xbd), Srgb::new(0xfc, 0xfd, 0xbf),
];
