//! Desktop preview of the bannister lights
//!
//! Runs the real controller on a background thread against simulated
//! sensors and shows the transmitted strip in a window.

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU16, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use bannister_lights::{
    AnimationId, Clock, Controller, ControllerConfig, Duration, Instant, LedStrip,
    LightIntensity, Mode, Rgb, STRIP_LEN, SensorGateway, Zone,
};
use eframe::egui::{self};
use smart_leds::SmartLedsWrite;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Marker for "nothing played yet"
const NO_ANIMATION: u8 = u8::MAX;

/// State shared between the UI and the controller thread
struct Shared {
    light: AtomicU16,
    upper: AtomicBool,
    lower: AtomicBool,
    /// Time scale in percent (100 = realtime)
    speed: AtomicU32,
    mode: AtomicU8,
    last_animation: AtomicU8,
    frame: Mutex<Vec<Rgb>>,
}

impl Shared {
    fn new() -> Self {
        Self {
            light: AtomicU16::new(50),
            upper: AtomicBool::new(false),
            lower: AtomicBool::new(false),
            speed: AtomicU32::new(100),
            mode: AtomicU8::new(Mode::Night.as_raw()),
            last_animation: AtomicU8::new(NO_ANIMATION),
            frame: Mutex::new(vec![Rgb::default(); STRIP_LEN]),
        }
    }
}

/// Sensors driven by the UI controls
struct SimulatedSensors(Arc<Shared>);

impl SensorGateway for SimulatedSensors {
    fn read_ambient_light(&mut self) -> LightIntensity {
        LightIntensity::new(self.0.light.load(Ordering::Relaxed))
    }

    fn read_motion(&mut self, zone: Zone) -> bool {
        match zone {
            Zone::Upper => self.0.upper.load(Ordering::Relaxed),
            Zone::Lower => self.0.lower.load(Ordering::Relaxed),
        }
    }
}

/// LED driver publishing frames to the UI
struct WindowDriver(Arc<Shared>);

impl SmartLedsWrite for WindowDriver {
    type Error = Infallible;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let frame: Vec<Rgb> = iterator.into_iter().map(Into::into).collect();
        if let Ok(mut shared) = self.0.frame.lock() {
            *shared = frame;
        }
        Ok(())
    }
}

/// Wall clock sped up by the UI speed slider
struct ScaledClock(Arc<Shared>);

impl Clock for ScaledClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn delay(&mut self, duration: Duration) {
        let speed = u64::from(self.0.speed.load(Ordering::Relaxed).max(1));
        let micros = duration.as_micros() * 100 / speed;
        thread::sleep(std::time::Duration::from_micros(micros));
    }
}

fn spawn_controller(shared: Arc<Shared>) {
    thread::spawn(move || {
        let strip: LedStrip<WindowDriver, STRIP_LEN> =
            LedStrip::new(WindowDriver(Arc::clone(&shared)));
        let mut controller = Controller::new(
            SimulatedSensors(Arc::clone(&shared)),
            strip,
            ScaledClock(Arc::clone(&shared)),
            ControllerConfig::DEFAULT,
        );

        loop {
            let mode = controller.tick();
            shared.mode.store(mode.as_raw(), Ordering::Relaxed);
            if let Some(trigger) = controller.last_trigger() {
                shared
                    .last_animation
                    .store(trigger.animation as u8, Ordering::Relaxed);
            }
            // sensors are polled, not interrupt driven
            thread::sleep(std::time::Duration::from_millis(20));
        }
    });
}

fn main() -> eframe::Result<()> {
    let shared = Arc::new(Shared::new());
    spawn_controller(Arc::clone(&shared));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 400.0])
            .with_title("Bannister Lights Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "bannister-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new(shared)))),
    )
}

struct PreviewApp {
    shared: Arc<Shared>,
    /// Ambient light reading (0-1023)
    light: u16,
    /// Upper motion sensor
    upper: bool,
    /// Lower motion sensor
    lower: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new(shared: Arc<Shared>) -> Self {
        Self {
            shared,
            light: 50,
            upper: false,
            lower: false,
            time_scale: 1.0,
            led_size: LED_SIZE,
        }
    }

    /// Push the control values to the controller thread
    fn publish_controls(&self) {
        self.shared.light.store(self.light, Ordering::Relaxed);
        self.shared.upper.store(self.upper, Ordering::Relaxed);
        self.shared.lower.store(self.lower, Ordering::Relaxed);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let speed = (self.time_scale * 100.0).round() as u32;
        self.shared.speed.store(speed, Ordering::Relaxed);
    }

    fn status(&self) -> (Mode, &'static str) {
        let mode = Mode::from_raw(self.shared.mode.load(Ordering::Relaxed));
        let animation = AnimationId::from_raw(self.shared.last_animation.load(Ordering::Relaxed))
            .map_or("none", AnimationId::as_str);
        (mode, animation)
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = self
            .shared
            .frame
            .lock()
            .map(|frame| frame.clone())
            .unwrap_or_default();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <SensorControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Light:");
                        ui.add(egui::Slider::new(&mut self.light, 0u16..=1023u16));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.checkbox(&mut self.upper, "Upper motion");
                        ui.add_space(8.0);
                        ui.checkbox(&mut self.lower, "Lower motion");
                    });
                });
                // </SensorControls>
                ui.add_space(16.0);
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(
                            egui::Slider::new(&mut self.time_scale, 1.0..=50.0)
                                .logarithmic(true),
                        );
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });
                });
                // </PlaybackControls>
            });

            self.publish_controls();

            ui.add_space(8.0);

            let (mode, animation) = self.status();
            ui.label(format!("Mode: {}    Last animation: {animation}", mode.as_str()));

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = frame.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) = ui.allocate_painter(
                egui::vec2(available_width, height),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
