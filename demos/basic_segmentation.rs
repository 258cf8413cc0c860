//! Basic example walking a sentence forward and back.

use segment::detect::whitespace;

fn main() -> anyhow::Result<()> {
    let text = b"Let's try previous and next on a short sentence.";
    let mut seg = whitespace::segmenter(text);

    while seg.next() {
        println!(
            "[{:>2}, {:>2}) {}",
            seg.start(),
            seg.end(),
            String::from_utf8_lossy(seg.bytes())
        );
    }
    if let Some(err) = seg.err() {
        anyhow::bail!("segmentation failed: {err}");
    }

    println!("-- back through {} recorded segments --", seg.depth());
    while seg.previous() {
        println!("{}", String::from_utf8_lossy(seg.bytes()));
    }

    Ok(())
}
