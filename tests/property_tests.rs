// tests/property_tests.rs
use proptest::prelude::*;
use reverse_endian::*;
use reverse_endian::Strategy;

proptest! {
    #[test]
    fn reverse_is_an_involution(v in any::<u32>()) {
        prop_assert_eq!(reverse32(reverse32(v)), v);
    }

    #[test]
    fn strategies_are_equivalent(v in any::<u32>()) {
        prop_assert_eq!(reverse32(v), reverse32_buffer(v));
        prop_assert_eq!(Strategy::Lanes.apply(v), Strategy::Buffer.apply(v));
    }

    #[test]
    fn reverse_matches_byte_reversal(v in any::<u32>()) {
        let mut bytes = v.to_le_bytes();
        bytes.reverse();
        prop_assert_eq!(reverse32(v), u32::from_le_bytes(bytes));
    }

    #[test]
    fn high_bits_are_ignored(low in any::<u32>(), high in any::<u32>()) {
        let wide = ((high as u64) << 32) | low as u64;
        prop_assert_eq!(reverse32_wide(wide), reverse32(low));
    }

    #[test]
    fn hex_text_round_trips(v in any::<u32>()) {
        prop_assert_eq!(parse_hex(&to_hex(v)), Ok(v));
        prop_assert_eq!(parse_hex(&display_bytes(v).replace(' ', "")), Ok(v));
    }

    #[test]
    fn formatted_lengths_are_fixed(v in any::<u32>()) {
        prop_assert_eq!(to_hex(v).len(), 10);
        prop_assert_eq!(display_bytes(v).len(), 11);
    }

    #[test]
    fn try_reverse_accepts_decimal(v in any::<u32>()) {
        prop_assert_eq!(try_reverse32(&v.to_string()), Some(reverse32(v)));
    }

    #[test]
    fn try_reverse_rejects_words(s in "[g-zG-Z][a-zA-Z ]{0,12}") {
        prop_assert_eq!(try_reverse32(&s), None);
    }

    #[test]
    fn batch_matches_single(values in prop::collection::vec(any::<u32>(), 0..64)) {
        let reversed = reverse_all(&values);
        prop_assert_eq!(reversed.len(), values.len());
        for (r, v) in reversed.iter().zip(&values) {
            prop_assert_eq!(*r, reverse32(*v));
        }
    }
}
