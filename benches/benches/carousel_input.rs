// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use understory_carousel::carousel::Carousel;
use understory_carousel::config::{CarouselConfig, DeckLayout};
use understory_carousel::host::{CooldownToken, FrameHandle, Host, ScrollIntoView};
use understory_carousel::track::Controls;
use understory_carousel::types::{InputEvent, PointerPhase, TouchPhase};

/// Host that only remembers what a real surface would need next frame.
#[derive(Default)]
struct BenchHost {
    offset: f64,
    cooldown: Option<CooldownToken>,
    frames: u64,
}

impl Host for BenchHost {
    fn apply_offset(&mut self, px: f64) {
        self.offset = px;
    }
    fn request_frame_loop(&mut self) -> FrameHandle {
        self.frames += 1;
        FrameHandle::new(self.frames)
    }
    fn cancel_frame_loop(&mut self, _handle: FrameHandle) {}
    fn schedule_cooldown(&mut self, _delay: Duration, token: CooldownToken) {
        self.cooldown = Some(token);
    }
    fn scroll_into_view(&mut self, _options: ScrollIntoView) {}
    fn set_controls(&mut self, _controls: Controls) {}
    fn set_grabbing(&mut self, _grabbing: bool) {}
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Trackpad-like swipes: mostly horizontal with a little vertical jitter.
fn gen_swipe(count: usize) -> Vec<Vec2> {
    let mut rng = Rng::new(0x5EED_CA40_u64);
    (0..count)
        .map(|_| Vec2::new(rng.next_f64() * 24.0 - 4.0, rng.next_f64() * 8.0 - 4.0))
        .collect()
}

fn mounted(slides: usize) -> (Carousel, BenchHost) {
    let mut host = BenchHost::default();
    let layout = DeckLayout::new(slides, 1280.0).with_controls(true, true);
    let carousel = Carousel::mount(layout, CarouselConfig::default(), &mut host).unwrap();
    (carousel, host)
}

fn bench_wheel(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel");
    for &n in &[64usize, 1024] {
        let deltas = gen_swipe(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("swipe_n{}", n), |b| {
            b.iter_batched(
                || mounted(16),
                |(mut carousel, mut host)| {
                    for &delta in &deltas {
                        let ev = InputEvent::Wheel { delta };
                        black_box(carousel.handle(&ev, &mut host));
                        // Expire every cooldown right away so each swipe can fire.
                        if let Some(token) = host.cooldown.take() {
                            carousel.on_cooldown_elapsed(token);
                        }
                    }
                    black_box(carousel.current_index())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    let moves = 240usize;
    group.throughput(Throughput::Elements(moves as u64));
    group.bench_function("pointer_moves_with_frames", |b| {
        b.iter_batched(
            || mounted(8),
            |(mut carousel, mut host)| {
                let slide = carousel.current_index();
                let down = InputEvent::Pointer {
                    phase: PointerPhase::Down,
                    slide,
                    page: Point::new(640.0, 0.0),
                };
                carousel.handle(&down, &mut host);
                let frame = FrameHandle::new(host.frames);
                for i in 0..moves {
                    let ev = InputEvent::Pointer {
                        phase: PointerPhase::Move,
                        slide,
                        page: Point::new(640.0 - i as f64, 0.0),
                    };
                    carousel.handle(&ev, &mut host);
                    if i % 4 == 0 {
                        black_box(carousel.on_frame(frame, &mut host));
                    }
                }
                let up = InputEvent::Pointer {
                    phase: PointerPhase::Up,
                    slide,
                    page: Point::ZERO,
                };
                carousel.handle(&up, &mut host);
                black_box(host.offset)
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("touch_moves", |b| {
        b.iter_batched(
            || mounted(8),
            |(mut carousel, mut host)| {
                let start = [Point::new(320.0, 40.0)];
                carousel.handle(
                    &InputEvent::Touch {
                        phase: TouchPhase::Start,
                        slide: 0,
                        touches: &start,
                    },
                    &mut host,
                );
                for i in 0..moves {
                    let at = [Point::new(320.0 - i as f64, 40.0)];
                    carousel.handle(
                        &InputEvent::Touch {
                            phase: TouchPhase::Move,
                            slide: 0,
                            touches: &at,
                        },
                        &mut host,
                    );
                }
                carousel.handle(
                    &InputEvent::Touch {
                        phase: TouchPhase::End,
                        slide: 0,
                        touches: &[],
                    },
                    &mut host,
                );
                black_box(carousel.current_index())
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_wheel, bench_drag);
criterion_main!(benches);
