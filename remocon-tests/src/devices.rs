// auto generated file from export xml
use phf::phf_map;

pub static DEVICES: phf::Map<&'static str, phf::Map<&'static str, &'static [u8]>> = phf_map! {
	"TV|A" => phf_map! {
		"POWER" => &[0x1A, 0x2B],
		"VOL|UP" => &[0xaa, 0x01, 0x55, 0x00],
		"VOL|DOWN" => &[0xaa, 0x01, 0x55, 0x01],
	},
	"LIGHT" => phf_map! {
		"ON" => &[0xC3, 0x0f],
		"OFF" => &[0xC3, 0x0e],
	},
};
