//! Integration tests for the color-rotation variant

mod common;
use common::*;

use switch_led_core::{
    COLOR_OFF, ColorRotationController, Level, PowerState, RgbLedOutputs, RgbLine, RotationStep, Srgb,
};

fn powered() -> ColorRotationController<MockOutputs> {
    let mut controller = ColorRotationController::new(MockOutputs::new());
    switch_on(&mut controller);
    controller.outputs_mut().clear_history();
    controller
}

#[test]
fn starts_with_every_line_low() {
    let controller = ColorRotationController::new(MockOutputs::new());
    assert!(controller.outputs().all_low());
    assert_eq!(controller.actuator().step(), RotationStep::First);
}

#[test]
fn three_ticks_complete_one_rotation() {
    let mut controller = powered();

    controller.on_tick();
    assert_eq!(controller.outputs().lit().as_slice(), &[RgbLine::Red]);
    controller.on_tick();
    assert_eq!(controller.outputs().lit().as_slice(), &[RgbLine::Green]);
    controller.on_tick();
    assert_eq!(controller.outputs().lit().as_slice(), &[RgbLine::Blue]);

    assert_eq!(controller.actuator().step(), RotationStep::First);
    assert_eq!(
        controller.outputs().history(),
        &[
            Write::Rgb(RgbLine::Blue, Level::Low),
            Write::Rgb(RgbLine::Red, Level::High),
            Write::Rgb(RgbLine::Red, Level::Low),
            Write::Rgb(RgbLine::Green, Level::High),
            Write::Rgb(RgbLine::Green, Level::Low),
            Write::Rgb(RgbLine::Blue, Level::High),
        ]
    );
}

#[test]
fn exactly_one_line_lit_after_every_tick() {
    let mut controller = powered();
    for _ in 0..30 {
        controller.on_tick();
        assert_eq!(controller.outputs().lit().len(), 1);
    }
}

#[test]
fn rotation_frozen_while_off() {
    let mut controller = powered();
    controller.on_tick();
    controller.on_tick();
    assert_eq!(controller.actuator().step(), RotationStep::Third);

    assert_eq!(controller.on_edge(), Some(PowerState::Off));
    controller.outputs_mut().clear_history();

    tick_n(&mut controller, 10);
    assert!(controller.outputs().history().is_empty());
    assert_eq!(controller.actuator().step(), RotationStep::Third);

    assert_eq!(controller.on_edge(), Some(PowerState::On));
    controller.on_tick();
    assert_eq!(controller.outputs().lit().as_slice(), &[RgbLine::Blue]);
    assert_eq!(controller.actuator().step(), RotationStep::First);
}

#[test]
fn samples_have_no_effect() {
    let mut controller = powered();
    feed(&mut controller, &[1000; 8]);
    assert!(controller.outputs().history().is_empty());
}

#[test]
fn drives_rgb_led_through_adapter() {
    let mut controller = ColorRotationController::new(RgbLedOutputs::new(MockRgbLed::new()));
    assert_eq!(controller.outputs().led().get_last_color(), COLOR_OFF);

    switch_on(&mut controller);
    controller.on_tick();
    assert_eq!(controller.outputs().led().get_last_color(), Srgb::new(1.0, 0.0, 0.0));
    controller.on_tick();
    assert_eq!(controller.outputs().led().get_last_color(), Srgb::new(0.0, 1.0, 0.0));

    tick_n(&mut controller, 2);
    assert_eq!(controller.on_edge(), Some(PowerState::Off));
    let led = controller.into_outputs().into_inner();
    assert_eq!(led.get_last_color(), COLOR_OFF);
    assert!(!led.color_history().is_empty());
}
