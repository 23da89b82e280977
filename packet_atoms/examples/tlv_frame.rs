// Look up records in a binary TLV frame, including one with a bogus length.

use packet_atoms::find_tlv_record;

const TAG_DEVICE_ID: u8 = 0x01;
const TAG_BATTERY_MV: u8 = 0x02;
const TAG_FIRMWARE: u8 = 0x03;

fn main() {
    let frame = [
        TAG_DEVICE_ID,
        0x04, // device id, 4 bytes
        0xDE,
        0xAD,
        0xBE,
        0xEF,
        TAG_BATTERY_MV,
        0x02, // battery, big-endian millivolts
        0x0C,
        0xE4,
    ];

    if let Some(id) = find_tlv_record(&frame, TAG_DEVICE_ID) {
        println!("Device id:  {:02X?}", id);
    }
    if let Some(&[hi, lo]) = find_tlv_record(&frame, TAG_BATTERY_MV) {
        println!("Battery:    {} mV", u16::from_be_bytes([hi, lo]));
    }
    match find_tlv_record(&frame, TAG_FIRMWARE) {
        Some(fw) => println!("Firmware:   {:02X?}", fw),
        None => println!("Firmware:   <absent>"),
    }

    // A peer claims a 255-byte value but sends a single byte
    let hostile = [TAG_DEVICE_ID, 0xFF, 0xAA];
    match find_tlv_record(&hostile, TAG_DEVICE_ID) {
        Some(_) => println!("Hostile frame: accepted (unexpected)"),
        None => println!("Hostile frame: rejected"),
    }
}
