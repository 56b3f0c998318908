//! PPU unit tests, organized by functionality.

use super::*;
use crate::cartridge::mappers::create_mapper;
use crate::cartridge::Cartridge;
use std::cell::RefCell;
use std::rc::Rc;

mod registers;
mod timing;

pub(crate) const PPUCTRL: u16 = 0x2000;
pub(crate) const PPUMASK: u16 = 0x2001;
pub(crate) const PPUSTATUS: u16 = 0x2002;
pub(crate) const OAMADDR: u16 = 0x2003;
pub(crate) const OAMDATA: u16 = 0x2004;
pub(crate) const PPUSCROLL: u16 = 0x2005;
pub(crate) const PPUADDR: u16 = 0x2006;
pub(crate) const PPUDATA: u16 = 0x2007;

pub(crate) fn test_cartridge_chr(chr: Vec<u8>) -> Cartridge {
    Cartridge {
        prg_rom: vec![0xAA; 16 * 1024],
        chr_rom: chr,
        trainer: None,
        mapper: 0,
        mirroring: Mirroring::Horizontal,
        has_battery: false,
    }
}

pub(crate) fn ppu_with_mapper() -> Ppu {
    let mut ppu = Ppu::new();
    let mapper = create_mapper(test_cartridge_chr(vec![0u8; 8 * 1024])).unwrap();
    ppu.set_mapper(Rc::new(RefCell::new(mapper)));
    ppu
}

#[test]
fn new_ppu_powers_on_clean() {
    let ppu = Ppu::new();
    assert_eq!(ppu.ctrl, 0);
    assert_eq!(ppu.status, 0);
    assert_eq!(ppu.scanline(), 0);
    assert_eq!(ppu.cycle(), 0);
}
