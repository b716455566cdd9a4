use graymap::ops;
use graymap::GrayImage;
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), graymap::Error> {
    // Demo stub: blurs a synthetic gradient and reports the latency
    let w = 640usize;
    let h = 480usize;
    let mut img = GrayImage::new(w, h, 255)?;
    for y in 0..h {
        for (x, px) in img.row_mut(y).iter_mut().enumerate() {
            *px = (x * 255 / (w - 1)) as u8;
        }
    }

    let start = Instant::now();
    ops::box_blur(&mut img, 7, 7)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let (min, max) = img.min_max();
    println!("blurred {w}x{h} radius=(7, 7) in {elapsed_ms:.3} ms, range=[{min}, {max}]");
    Ok(())
}
