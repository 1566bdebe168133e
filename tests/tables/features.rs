use otl_parser::{FeatureList, Tag};

use crate::{convert, Unit::*};

#[test]
fn directory_order_is_preserved() {
    let data = convert(&[
        UInt16(2), // feature count: 2
        TagStr("liga"), // feature tag [0]
        UInt16(14), // feature offset [0]: 14
        TagStr("kern"), // feature tag [1]
        UInt16(20), // feature offset [1]: 20
        // Feature 'liga', at 14
        UInt16(0), // feature params offset
        UInt16(1), // lookup count: 1
        UInt16(3), // lookup index [0]
        // Feature 'kern', at 20
        UInt16(0), // feature params offset
        UInt16(2), // lookup count: 2
        UInt16(4), // lookup index [0]
        UInt16(0), // lookup index [1]
    ]);

    let list = FeatureList::parse(&data, 0).unwrap();
    assert_eq!(list.records().len(), 2);
    // 'liga' sorts after 'kern', but directory order is kept.
    assert_eq!(list.records()[0].tag, Tag::from_bytes(b"liga"));
    assert_eq!(list.records()[0].lookups, &[3]);
    assert_eq!(list.records()[1].tag, Tag::from_bytes(b"kern"));
    assert_eq!(list.records()[1].lookups, &[4, 0]);
}

#[test]
fn get_maps_language_feature_indices() {
    let data = convert(&[
        UInt16(2), // feature count: 2
        TagStr("liga"), // feature tag [0]
        UInt16(14), // feature offset [0]: 14
        TagStr("kern"), // feature tag [1]
        UInt16(18), // feature offset [1]: 18
        // Feature 'liga', at 14
        UInt16(0), // feature params offset
        UInt16(0), // lookup count: 0
        // Feature 'kern', at 18
        UInt16(0), // feature params offset
        UInt16(0), // lookup count: 0
    ]);

    let list = FeatureList::parse(&data, 0).unwrap();
    assert_eq!(list.get(0).unwrap().tag, Tag::from_bytes(b"liga"));
    assert_eq!(list.get(1).unwrap().tag, Tag::from_bytes(b"kern"));
    assert_eq!(list.get(2), None);
}

#[test]
fn list_at_non_zero_offset() {
    let data = convert(&[
        Raw(&[0x00; 4]), // padding, feature list starts at 4
        UInt16(1), // feature count: 1
        TagStr("smcp"), // feature tag [0]
        UInt16(8), // feature offset [0]: 4 + 8 = 12
        // Feature 'smcp', at 12
        UInt16(0), // feature params offset
        UInt16(1), // lookup count: 1
        UInt16(9), // lookup index [0]
    ]);

    let list = FeatureList::parse(&data, 4).unwrap();
    assert_eq!(list.records().len(), 1);
    assert_eq!(list.records()[0].tag, Tag::from_bytes(b"smcp"));
    assert_eq!(list.records()[0].lookups, &[9]);
}
