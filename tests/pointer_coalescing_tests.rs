use chart_hover::api::DeferredQueue;
use chart_hover::core::{ChartGeometry, Margins, SeriesConfig, TimePoint, TimeSeries};
use chart_hover::interaction::{CoalescerConfig, PointerCoalescer, PointerEvent};
use chart_hover::render::{Color, HoverFrame, Renderer};
use chart_hover::{ChartResult, HoverConfig, HoverController};

#[derive(Debug, Default)]
struct RecordingRenderer {
    frames: Vec<HoverFrame>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &HoverFrame) -> ChartResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

fn controller(coalescer: CoalescerConfig) -> HoverController<RecordingRenderer> {
    let geometry =
        ChartGeometry::new(600.0, 300.0).with_margins(Margins::new(40.0, 20.0, 30.0, 20.0));
    let config = HoverConfig::new(geometry).with_coalescer(coalescer);
    let mut controller =
        HoverController::new(RecordingRenderer::default(), config).expect("controller");
    let points = (0..=100_i32)
        .map(|t| TimePoint::new(f64::from(t), f64::from(t) / 100.0))
        .collect();
    controller
        .set_series(vec![SeriesConfig::new(
            "pnl",
            TimeSeries::new(points).expect("series"),
            Color::rgb(0.9, 0.3, 0.1),
            "PnL",
        )])
        .expect("set series");
    controller.renderer_mut().frames.clear();
    controller
}

fn burst(controller: &mut HoverController<RecordingRenderer>, queue: &mut DeferredQueue) -> f64 {
    let mut last_x = 0.0;
    for i in 0..20_i32 {
        last_x = 40.0 + f64::from(i) * 25.0;
        queue.schedule(controller.on_pointer_event(PointerEvent::Move {
            x: last_x,
            y: 50.0,
            time_ms: f64::from(i),
        }));
    }
    last_x
}

#[test]
fn burst_drains_at_most_quantiles_plus_one_including_the_latest() {
    let coalescer = CoalescerConfig {
        drop_stale: false,
        ..CoalescerConfig::default()
    };
    let mut controller = controller(coalescer);
    let mut queue = DeferredQueue::new();
    let last_x = burst(&mut controller, &mut queue);

    let steps = queue.run_until_idle(&mut controller);
    assert!(steps <= coalescer.quantiles + 1, "drained {steps} samples");
    assert_eq!(controller.renderer().frames.len(), steps);

    let latest = controller.annotate_at(last_x);
    assert!(
        controller
            .renderer()
            .frames
            .iter()
            .any(|frame| frame.annotations == latest)
    );
    assert_eq!(controller.queued_len(), 0);
}

#[test]
fn drop_stale_paints_only_the_latest_position() {
    let mut controller = controller(CoalescerConfig::default());
    let mut queue = DeferredQueue::new();
    let last_x = burst(&mut controller, &mut queue);

    assert_eq!(queue.run_until_idle(&mut controller), 1);
    let frames = &controller.renderer().frames;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].annotations, controller.annotate_at(last_x));
}

#[test]
fn pointer_events_resume_after_drain_completes() {
    let mut controller = controller(CoalescerConfig::default());
    let mut queue = DeferredQueue::new();
    burst(&mut controller, &mut queue);
    queue.run_until_idle(&mut controller);

    let ticket = controller.on_pointer_event(PointerEvent::Move {
        x: 300.0,
        y: 10.0,
        time_ms: 100.0,
    });
    assert!(ticket.is_some());
    queue.schedule(ticket);
    queue.run_until_idle(&mut controller);
    assert_eq!(controller.annotations(), controller.annotate_at(300.0).as_slice());
}

#[test]
fn thinning_keeps_queue_bounded_for_custom_parameters() {
    let config = CoalescerConfig {
        threshold: 8,
        quantiles: 3,
        drop_stale: false,
    };
    let mut coalescer = PointerCoalescer::new(config.validate().expect("config"));
    let mut ticket = None;
    for i in 0..50_i32 {
        ticket = ticket.or(coalescer.submit(f64::from(i), f64::from(i)));
        assert!(coalescer.len() <= config.threshold);
    }
    let ticket = ticket.expect("first submission schedules a drain");
    assert_eq!(coalescer.take(ticket).map(|sample| sample.seq), Some(49));
}
