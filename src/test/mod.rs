use std::time::{Duration, Instant};

use glam::UVec2;

use crate::{FrameCap, FramePacer, Schedule, WindowConfig};

#[test]
fn default_window_config() {
    let config = WindowConfig::default();
    assert_eq!(config.title, "Model-Viewer");
    assert_eq!(config.size, UVec2::new(640, 480));
    assert_eq!(config.foreground, FrameCap::Limited(60));
    assert_eq!(config.background, FrameCap::Limited(60));
}

#[test]
fn frame_cap_from_fps() {
    assert_eq!(FrameCap::from_fps(0), FrameCap::Unlimited);
    assert_eq!(FrameCap::from_fps(-1), FrameCap::Paused);
    assert_eq!(FrameCap::from_fps(30), FrameCap::Limited(30));
    assert_eq!(
        FrameCap::Limited(50).interval(),
        Some(Duration::from_millis(20))
    );
    assert_eq!(FrameCap::Unlimited.interval(), None);
}

#[test]
fn first_frame_is_due_immediately() {
    let pacer = FramePacer::new(FrameCap::Limited(60), FrameCap::Limited(10));
    assert_eq!(pacer.schedule(Instant::now()), Schedule::Now);
}

#[test]
fn waits_one_interval_between_frames() {
    let mut pacer = FramePacer::new(FrameCap::Limited(10), FrameCap::Limited(10));
    let start = Instant::now();
    pacer.frame_presented(start);
    let due = start + Duration::from_millis(100);
    assert_eq!(pacer.schedule(start), Schedule::At(due));
    assert_eq!(pacer.schedule(start + Duration::from_millis(50)), Schedule::At(due));
    assert_eq!(pacer.schedule(due), Schedule::Now);
}

#[test]
fn focus_selects_cap() {
    let mut pacer = FramePacer::new(FrameCap::Limited(60), FrameCap::Limited(5));
    let start = Instant::now();
    pacer.frame_presented(start);
    pacer.set_focused(false);
    assert_eq!(pacer.cap(), FrameCap::Limited(5));
    assert_eq!(
        pacer.schedule(start),
        Schedule::At(start + Duration::from_millis(200))
    );
    pacer.set_focused(true);
    assert_eq!(pacer.cap(), FrameCap::Limited(60));
}

#[test]
fn unlimited_and_paused() {
    let mut pacer = FramePacer::new(FrameCap::Unlimited, FrameCap::Paused);
    let now = Instant::now();
    pacer.frame_presented(now);
    assert_eq!(pacer.schedule(now), Schedule::Now);
    pacer.set_focused(false);
    assert_eq!(pacer.schedule(now), Schedule::Idle);
}
