use randomart::{Config, Stride};

const FINGERPRINT: &str = "CB7C8A7B567FB2C2ACC2873B04FAC2E9CC21424A";

fn unhexlify(s: &str) -> Result<Vec<u8>, String> {
    if s.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in {s:?}"));
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).map_err(|e| format!("{s:?}: {e}")))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let hex = std::env::args().nth(1).unwrap_or_else(|| FINGERPRINT.to_owned());
    let key = unhexlify(hex.trim())?;

    println!("{hex}");
    println!("{}", Config::default().render(&key)?);
    println!("{}", Config::default().set_stride(Stride::Height).render(&key)?);
    Ok(())
}
