use proptest::prelude::*;

use castellan_types::{Address, PermissionHash, Selector, Timestamp};

proptest! {
    /// Address roundtrip: new -> as_bytes produces the same bytes.
    #[test]
    fn address_roundtrip(bytes in prop::array::uniform20(0u8..)) {
        let addr = Address::new(bytes);
        prop_assert_eq!(addr.as_bytes(), &bytes);
    }

    /// Address::is_zero is true only for all-zero bytes.
    #[test]
    fn address_is_zero_correct(bytes in prop::array::uniform20(0u8..)) {
        let addr = Address::new(bytes);
        prop_assert_eq!(addr.is_zero(), bytes == [0u8; 20]);
    }

    /// Selector equality is exactly byte equality.
    #[test]
    fn selector_equality(a in prop::array::uniform4(0u8..), b in prop::array::uniform4(0u8..)) {
        prop_assert_eq!(Selector::new(a) == Selector::new(b), a == b);
    }

    /// PermissionHash bincode roundtrip.
    #[test]
    fn permission_hash_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = PermissionHash::new(bytes);
        let encoded = bincode::serialize(&hash).unwrap();
        let decoded: PermissionHash = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded.as_bytes(), hash.as_bytes());
    }

    /// Address bincode roundtrip.
    #[test]
    fn address_bincode_roundtrip(bytes in prop::array::uniform20(0u8..)) {
        let addr = Address::new(bytes);
        let encoded = bincode::serialize(&addr).unwrap();
        let decoded: Address = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, addr);
    }

    /// Timestamp ordering matches the underlying seconds.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// elapsed_since is exact when now is after the timestamp.
    #[test]
    fn timestamp_elapsed_since(base in 0u64..1_000_000, offset in 0u64..1_000_000) {
        let t = Timestamp::new(base);
        let now = Timestamp::new(base + offset);
        prop_assert_eq!(t.elapsed_since(now), offset);
    }

    /// has_expired agrees with manual arithmetic on the inclusive boundary.
    #[test]
    fn timestamp_has_expired_inclusive(
        base in 0u64..1_000_000,
        duration in 0u64..1_000_000,
        jitter in 0u64..1_000,
    ) {
        let start = Timestamp::new(base);
        prop_assert!(start.has_expired(duration, Timestamp::new(base + duration + jitter)));
        if duration > 0 {
            prop_assert!(!start.has_expired(duration, Timestamp::new(base + duration - 1)));
        }
    }

    /// remaining() is zero exactly when has_expired() is true.
    #[test]
    fn timestamp_remaining_consistent_with_expiry(
        base in 0u64..1_000_000,
        duration in 0u64..1_000_000,
        now in 0u64..3_000_000,
    ) {
        let start = Timestamp::new(base);
        let now = Timestamp::new(now);
        prop_assert_eq!(start.remaining(duration, now) == 0, start.has_expired(duration, now));
    }
}
