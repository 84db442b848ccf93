use ch8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, MEMORY_SIZE};
use ch8_core::instruction::Instruction;
use ch8_core::{Chip8, Error};
use proptest::prelude::*;

/// V0 = x; V1 = y; I = 0x300; draw twice; sprite rows live at 0x300
fn draw_twice_program(x: u8, y: u8, rows: &[u8]) -> Vec<u8> {
    let n = rows.len() as u8;
    let mut program = vec![
        0x60, x, 0x61, y, 0xA3, 0x00, 0xD0, 0x10 | n, 0xD0, 0x10 | n,
    ];
    program.resize(0x100, 0x00);
    program.extend_from_slice(rows);
    program
}

proptest! {
    #[test]
    fn decode_never_panics(op in any::<u16>()) {
        match Instruction::decode(op) {
            Ok(_) => {}
            Err(err) => {
                prop_assert_eq!(err, Error::InvalidOpcode(op));
            }
        }
    }

    #[test]
    fn drawing_twice_restores_the_screen(
        x in any::<u8>(),
        y in any::<u8>(),
        rows in prop::collection::vec(any::<u8>(), 1..16),
    ) {
        let mut chip8 = Chip8::with_seed(1);
        chip8.load(&draw_twice_program(x, y, &rows)).unwrap();
        for _ in 0..3 {
            chip8.tick().unwrap();
        }

        let lit = rows.iter().any(|&row| row != 0);
        let first = chip8.tick().unwrap();
        prop_assert_eq!(first.screen_changed, lit);
        prop_assert_eq!(chip8.state().v[0xF], u8::from(lit));
        let pixels = chip8.frame_buffer().iter().flatten().filter(|&&p| p).count();
        let bits: u32 = rows.iter().map(|row| row.count_ones()).sum();
        prop_assert_eq!(pixels, bits as usize);

        let second = chip8.tick().unwrap();
        prop_assert_eq!(second.screen_changed, lit);
        prop_assert_eq!(chip8.state().v[0xF], u8::from(lit));
        prop_assert!(chip8.frame_buffer().iter().flatten().all(|&p| !p));
    }

    #[test]
    fn sprites_land_inside_the_screen(x in any::<u8>(), y in any::<u8>()) {
        let mut chip8 = Chip8::with_seed(1);
        chip8.load(&draw_twice_program(x, y, &[0x80])).unwrap();
        for _ in 0..4 {
            chip8.tick().unwrap();
        }
        let row = y as usize % DISPLAY_HEIGHT;
        let column = x as usize % DISPLAY_WIDTH;
        prop_assert!(chip8.frame_buffer()[row][column]);
    }

    #[test]
    fn add_immediate_wraps_without_carry(a in any::<u8>(), kk in any::<u8>()) {
        let mut chip8 = Chip8::with_seed(1);
        chip8.load(&[0x63, a, 0x73, kk]).unwrap();
        chip8.tick().unwrap();
        chip8.tick().unwrap();
        prop_assert_eq!(chip8.state().v[0x3], a.wrapping_add(kk));
        prop_assert_eq!(chip8.state().v[0xF], 0);
        prop_assert_eq!(chip8.state().pc, 0x204);
    }

    #[test]
    fn load_accepts_exactly_what_fits(len in 0..MEMORY_SIZE) {
        let mut chip8 = Chip8::with_seed(1);
        let image = vec![0xA5; len];
        let capacity = MEMORY_SIZE - 0x200;
        if len <= capacity {
            prop_assert!(chip8.load(&image).is_ok());
            prop_assert!(chip8.state().memory[0x200..0x200 + len].iter().all(|&b| b == 0xA5));
        } else {
            prop_assert_eq!(chip8.load(&image), Err(Error::ImageTooLarge { size: len, capacity }));
            prop_assert!(chip8.state().memory[0x200..].iter().all(|&b| b == 0));
        }
    }
}
