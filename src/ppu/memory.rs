// PPU memory access: VRAM nametable mirroring and palette RAM.

use super::constants::NAMETABLE_SIZE;
use super::Ppu;
use crate::cartridge::Mirroring;

impl Ppu {
    /// Map a logical nametable index (0..4, taken from `ctrl & 0x03` or from
    /// a VRAM address's nametable-select bits) to a byte offset into the 2KB
    /// `vram` array, according to the cartridge's mirroring mode.
    pub(super) fn nametable_base_offset(&self, nametable_index: u8) -> usize {
        let table = match self.mirroring {
            Mirroring::Horizontal => match nametable_index {
                0 | 1 => 0,
                _ => 1,
            },
            Mirroring::Vertical => match nametable_index {
                0 | 2 => 0,
                _ => 1,
            },
            Mirroring::SingleScreen => 0,
            // Four-screen would need 4KB of VRAM; fold it down like horizontal.
            Mirroring::FourScreen => match nametable_index {
                0 | 1 => 0,
                _ => 1,
            },
        };
        table * NAMETABLE_SIZE
    }

    /// Resolve a $2000-$2FFF (or its $3000-$3EFF mirror, already folded down
    /// by the caller) nametable address to a physical offset into `vram`.
    fn mirror_nametable_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x0FFF) as usize;
        let nametable_index = (addr / NAMETABLE_SIZE) as u8;
        let offset = addr % NAMETABLE_SIZE;
        self.nametable_base_offset(nametable_index) + offset
    }

    /// Fold a palette address down to 0..32, aliasing the four sprite-palette
    /// backdrop entries onto their background counterparts.
    pub(super) fn mirror_palette_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x001F) as usize;
        if addr >= 16 && addr % 4 == 0 {
            addr - 16
        } else {
            addr
        }
    }

    /// Read the PPU's own address space: pattern tables via the mapper,
    /// nametables/attribute tables from VRAM, palette RAM with its mirrors.
    pub(super) fn read_vram(&self, addr: u16) -> u8 {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => self
                .mapper
                .as_ref()
                .map(|m| m.borrow().ppu_read(addr))
                .unwrap_or(0),
            0x2000..=0x2FFF => self.vram[self.mirror_nametable_addr(addr)],
            0x3000..=0x3EFF => self.vram[self.mirror_nametable_addr(addr - 0x1000)],
            0x3F00..=0x3FFF => self.palette[self.mirror_palette_addr(addr)],
            _ => unreachable!(),
        }
    }

    /// Write the PPU's own address space.
    pub(super) fn write_vram(&mut self, addr: u16, data: u8) {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => {
                if let Some(mapper) = &self.mapper {
                    mapper.borrow_mut().ppu_write(addr, data);
                }
            }
            0x2000..=0x2FFF => {
                let offset = self.mirror_nametable_addr(addr);
                self.vram[offset] = data;
            }
            0x3000..=0x3EFF => {
                let offset = self.mirror_nametable_addr(addr - 0x1000);
                self.vram[offset] = data;
            }
            0x3F00..=0x3FFF => {
                let offset = self.mirror_palette_addr(addr);
                self.palette[offset] = data;
            }
            _ => unreachable!(),
        }
    }
}
