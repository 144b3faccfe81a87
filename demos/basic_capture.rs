//! Basic example: record a handful of values and query them.

use tallyrank::Recorder;

fn main() -> anyhow::Result<()> {
    let mut capture = Recorder::new();
    for value in [3, 9, 3, 4, 6] {
        capture.insert(value)?;
    }

    let stats = capture.snapshot()?;
    println!("less(4) = {}", stats.less(4)?);
    println!("greater(4) = {}", stats.greater(4)?);
    println!("between(3, 6) = {}", stats.between(3, 6)?);

    // Values that were never recorded are answered from the same index.
    println!("less(5) = {}", stats.less(5)?);
    println!("values between 3 and 6: {:?}", stats.between_values(3, 6)?);

    Ok(())
}
