//! Small region data documents shared by unit tests.

use super::PreloadSupplier;

pub(crate) const US_DATA: &str = r#"{
  "data/US": {"id": "data/US", "key": "US", "name": "UNITED STATES", "languages": "en", "sub_keys": "CA~NY~TX", "zip": "\\d{5}"},
  "data/US/CA": {"id": "data/US/CA", "key": "CA", "name": "California"},
  "data/US/NY": {"id": "data/US/NY", "key": "NY", "name": "New York"},
  "data/US/TX": {"id": "data/US/TX", "key": "TX", "name": "Texas"}
}"#;

pub(crate) const CN_DATA: &str = r#"{
  "data/CN": {"key": "CN", "name": "CHINA", "languages": "zh-Hans", "lfmt": "%N%n%O%n%A%n%D%n%C%n%S, %Z", "sub_keys": "北京市~广东省"},
  "data/CN/北京市": {"key": "北京市", "name": "北京市", "lname": "Beijing Shi", "sub_keys": "东城区~西城区"},
  "data/CN/北京市/东城区": {"key": "东城区", "name": "东城区", "lname": "Dongcheng Qu"},
  "data/CN/北京市/西城区": {"key": "西城区", "name": "西城区", "lname": "Xicheng Qu"},
  "data/CN/广东省": {"key": "广东省", "name": "广东省", "lname": "Guangdong Sheng", "sub_keys": "深圳市"},
  "data/CN/广东省/深圳市": {"key": "深圳市", "name": "深圳市", "lname": "Shenzhen Shi", "sub_keys": "南山区"},
  "data/CN/广东省/深圳市/南山区": {"key": "南山区", "name": "南山区", "lname": "Nanshan Qu"}
}"#;

pub(crate) const CH_DATA: &str = r#"{
  "data/CH": {"key": "CH", "name": "SWITZERLAND", "languages": "de~fr~it", "sub_keys": "GE~ZH"},
  "data/CH/GE": {"key": "GE", "name": "Genève"},
  "data/CH/GE--fr": {"key": "GE", "name": "Genève"},
  "data/CH/ZH": {"key": "ZH", "name": "Zürich"}
}"#;

pub(crate) const VN_DATA: &str = r#"{
  "data/VN": {
    "key": "VN", "name": "VIET NAM", "languages": "vi", "lfmt": "%N%n%O%n%A%n%C%n%S %Z",
    "sub_keys": "Thành phố Đà Nẵng~Tỉnh Điện Biên"
  },
  "data/VN/Thành phố Đà Nẵng": {"key": "Thành phố Đà Nẵng", "name": "Thành phố Đà Nẵng", "lname": "Da Nang City"},
  "data/VN/Tỉnh Điện Biên": {"key": "Tỉnh Điện Biên", "name": "Tỉnh Điện Biên", "lname": "Dien Bien Province"}
}"#;

/// Keys spelled like their Latin names but in a different case.
pub(crate) const JP_DATA: &str = r#"{
  "data/JP": {"key": "JP", "name": "JAPAN", "languages": "ja", "lfmt": "%N%n%O%n%A, %S%n%Z", "sub_keys": "TOKYO-TO~OSAKA-FU"},
  "data/JP/TOKYO-TO": {"key": "TOKYO-TO", "name": "東京都", "lname": "Tokyo-to"},
  "data/JP/OSAKA-FU": {"key": "OSAKA-FU", "name": "大阪府", "lname": "Osaka-fu"}
}"#;

/// Supplier with the US, CN, CH, VN and JP fixtures loaded.
pub(crate) fn supplier() -> PreloadSupplier {
    let mut supplier = PreloadSupplier::new();
    supplier.load_region_json("US", US_DATA).unwrap();
    supplier.load_region_json("CN", CN_DATA).unwrap();
    supplier.load_region_json("CH", CH_DATA).unwrap();
    supplier.load_region_json("VN", VN_DATA).unwrap();
    supplier.load_region_json("JP", JP_DATA).unwrap();
    supplier
}
