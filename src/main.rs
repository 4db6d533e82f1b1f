use std::{env, fs, io};
use std::error::Error;
use std::io::ErrorKind;
use netpbm_reader::parser;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = env::args().collect::<Vec<String>>();
    let image_file = args.get(1)
        .ok_or_else(|| Box::new(io::Error::new(ErrorKind::InvalidInput, "Not enough arguments!")))?;
    let contents = fs::read(image_file)?;
    let image = parser::decode_rgb(&contents)?;
    log::info!("Loaded {image_file}");
    show(&image)
}

#[cfg(feature = "display")]
fn show(image: &netpbm_reader::RgbImage) -> Result<(), Box<dyn Error>> {
    netpbm_reader::display::display_netpbm(image)?;
    Ok(())
}

#[cfg(not(feature = "display"))]
fn show(image: &netpbm_reader::RgbImage) -> Result<(), Box<dyn Error>> {
    print!("{image}");
    Ok(())
}
