// Parse a simulated BME280 sensor reading with the JSON field extractor.

use packet_atoms::{extract_field, ExtractError, FieldBuffer};

fn main() -> Result<(), ExtractError> {
    let sensor_json = r#"{"temp":22.5,"hum":65,"pres":1013.25}"#;
    println!("Parsing BME280 sensor data...");
    println!("JSON: {}", sensor_json);
    println!();

    let mut temp = FieldBuffer::<16>::new();
    let mut hum = FieldBuffer::<16>::new();
    let mut pres = FieldBuffer::<16>::new();

    extract_field(sensor_json, "temp", &mut temp)?;
    match temp.parse::<f32>() {
        Some(celsius) => println!(
            "Temperature: {:.1}°C ({:.1}°F)",
            celsius,
            celsius * 9.0 / 5.0 + 32.0
        ),
        None => println!("Temperature: {} (not a number)", temp),
    }

    extract_field(sensor_json, "hum", &mut hum)?;
    println!("Humidity:    {}%", hum);

    extract_field(sensor_json, "pres", &mut pres)?;
    println!("Pressure:    {} hPa", pres);

    println!();
    println!("✅ Parsed all fields");
    Ok(())
}
