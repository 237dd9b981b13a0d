#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use super::*;

#[test]
fn initial_packs_to_zero() {
    assert_eq!(ScanState::INITIAL.to_u32(), 0);
    assert_eq!(ScanState::from_u32(0).unwrap(), ScanState::INITIAL);
}

#[test]
fn fields_land_in_documented_bits() {
    let state = ScanState {
        host_state: 0xABCD,
        in_continuation: true,
        brace_depth: 3,
        in_single_quote: false,
        in_double_quote: true,
        mid_segment: true,
    };
    let packed = state.to_u32();
    assert_eq!(packed & 0xFFFF, 0xABCD);
    assert_eq!(packed & (1 << 16), 1 << 16);
    assert_eq!((packed >> 17) & 0xF, 3);
    assert_eq!(packed & (1 << 21), 0);
    assert_eq!(packed & (1 << 22), 1 << 22);
    assert_eq!(packed & (1 << 23), 1 << 23);
}

#[test]
fn depth_saturates() {
    assert_eq!(ScanState::clamp_depth(3), 3);
    assert_eq!(ScanState::clamp_depth(99), ScanState::MAX_BRACE_DEPTH);
    let state = ScanState {
        brace_depth: 200,
        ..ScanState::INITIAL
    };
    assert_eq!(ScanState::from_u32(state.to_u32()).unwrap().brace_depth, 15);
}

#[test]
fn reserved_bits_are_rejected() {
    assert_eq!(
        ScanState::from_u32(1 << 24),
        Err(StateError::ReservedBits(1 << 24))
    );
    assert!(ScanState::try_from(0x8000_0000u32).is_err());
}

proptest! {
    #[test]
    fn pack_unpack_identity(
        host in any::<u16>(),
        cont in any::<bool>(),
        depth in 0u8..=15,
        sq in any::<bool>(),
        dq in any::<bool>(),
        mid in any::<bool>(),
    ) {
        let state = ScanState {
            host_state: host,
            in_continuation: cont,
            brace_depth: depth,
            in_single_quote: sq,
            in_double_quote: dq,
            mid_segment: mid,
        };
        let packed: u32 = state.into();
        prop_assert_eq!(ScanState::try_from(packed), Ok(state));
    }
}
