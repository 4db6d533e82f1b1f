use sdl2::pixels::Color;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::rect;

use crate::image::{ImageSink, RgbImage};

pub fn display_netpbm(image: &RgbImage) -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem.window("netpbm", image.width().max(1), image.height().max(1))
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let rgb = image.pixel(x, y).unwrap_or_default();
            canvas.set_draw_color(Color::RGB((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8));
            let point = rect::Point::new(x as i32, y as i32);
            canvas.draw_point(point)?;
        }
    }
    canvas.present();
    let mut event_pump = sdl_context.event_pump()?;
    'showing: loop {
        let event = event_pump.wait_event();
        match event {
            Event::Quit { .. } |
            Event::KeyDown { keycode: Some(Keycode::Escape), .. } => {
                break 'showing;
            }
            _ => {}
        }
    }
    Ok(())
}
