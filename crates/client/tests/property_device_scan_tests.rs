//! Property tests for scanning a device listing by name.

use proptest::prelude::*;
use zenoss_client::{DeviceList, DeviceRecord};

fn listing(names: &[String], hash: &str) -> DeviceList {
    DeviceList {
        devices: names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut record = DeviceRecord::new(name.clone());
                record.uid = Some(format!("/zport/dmd/Devices/devices/{i}"));
                record
            })
            .collect(),
        hash: hash.to_string(),
    }
}

proptest! {
    #[test]
    fn find_returns_first_exact_match(
        names in prop::collection::vec("[a-c]{1,3}", 0..20),
        target in "[a-c]{1,3}",
        hash in "[0-9a-f]{32}",
    ) {
        let list = listing(&names, &hash);
        let expected = names.iter().position(|n| *n == target);

        match (list.find(&target), expected) {
            (Some(found), Some(index)) => {
                prop_assert_eq!(found.device.name, target);
                prop_assert_eq!(found.device.uid, Some(format!("/zport/dmd/Devices/devices/{index}")));
                prop_assert_eq!(found.hash, hash);
            }
            (None, None) => {}
            (found, expected) => {
                prop_assert!(false, "found {:?}, expected index {:?}", found, expected);
            }
        }
    }
}
