//! Write a small tagged record into a mapped file, then read it back
//!
//! Pass a path to dump the first bytes of an existing file instead.
//! Set `RUST_LOG=bincursor=trace` to see cursor events.

use bincursor::{Cursor, CursorConfig};
use std::io::Write;

const MAGIC: &str = "BCUR";

fn write_record(cursor: &mut Cursor) -> bincursor::Result<()> {
    cursor.set_string(MAGIC)?;
    cursor.set_u16(1)?;
    cursor.set_string("mesh\0")?;
    cursor.set_vector3([0.0, 1.5, -3.25])?;
    cursor.set_quaternion([0.0, 0.0, 0.0, 1.0])?;
    cursor.set_half_vector3([0.5, 0.25, 1.0])?;
    Ok(())
}

fn dump_record(cursor: &mut Cursor) -> bincursor::Result<()> {
    cursor.rewind();
    println!("magic:      {}", cursor.get_string(MAGIC.len())?);
    println!("version:    {}", cursor.get_u16()?);
    println!("name:       {}", cursor.get_null_string()?);
    println!("position:   {:?}", cursor.get_vector3()?);
    println!("rotation:   {:?}", cursor.get_quaternion()?);
    println!("scale:      {:?}", cursor.get_half_vector3()?);
    println!("consumed {} of {} bytes", cursor.tell(), cursor.len());
    Ok(())
}

fn dump_head(cursor: &mut Cursor) -> bincursor::Result<()> {
    let len = cursor.len().min(64);
    for (row, chunk) in cursor.get_bytes(len)?.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        println!("{:08x}  {}", row * 16, hex.join(" "));
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Some(path) = std::env::args().nth(1) {
        let mut cursor = Cursor::map_file(&path, CursorConfig::default())?;
        println!("{path}: {} bytes", cursor.len());
        dump_head(&mut cursor)?;
        return Ok(());
    }

    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(&[0u8; 64])?;
    file.flush()?;

    let mut cursor = Cursor::map_file(file.path(), CursorConfig::default())?;
    write_record(&mut cursor)?;
    cursor.buffer().flush()?;
    dump_record(&mut cursor)?;
    Ok(())
}
