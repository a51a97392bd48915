//! Per-frame gesture driver

use super::screen_map::ScreenMap;
use super::trace::GestureTrace;
use crate::detector::DetectedFrame;
use crate::event::{Dispatcher, Event};
use crate::hand::{FingerTip, Hand};

/// Consumes raw per-frame landmarks, applies the gesture rules, and emits
/// pointer events through its dispatcher.
///
/// Owns the dispatcher (listeners are injected by the process entry point)
/// and the precomputed camera-to-screen map. Single-threaded and
/// frame-synchronous: one call to [`process`](Self::process) handles one
/// frame completely.
pub struct GestureController {
    map: ScreenMap,
    dispatcher: Dispatcher,
    trace: Option<Box<dyn GestureTrace>>,
}

impl GestureController {
    pub fn new(map: ScreenMap) -> Self {
        Self {
            map,
            dispatcher: Dispatcher::new(),
            trace: None,
        }
    }

    pub fn screen_map(&self) -> &ScreenMap {
        &self.map
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    /// Install a classification observer (see [`GestureTrace`])
    pub fn set_trace(&mut self, trace: Box<dyn GestureTrace>) {
        self.trace = Some(trace);
    }

    /// Process one frame of detector output. `None` (no frame available
    /// this cycle) is treated the same as a frame with zero hands.
    ///
    /// For each detected hand: build the landmark model, classify the
    /// fingers, and dispatch a move event iff the index finger is
    /// extended. The move targets the index finger's base joint remapped
    /// through the interaction box; other fingers' positions never feed
    /// the coordinates.
    ///
    /// Returns the number of events dispatched for this frame.
    pub fn process(&mut self, frame: Option<&DetectedFrame>) -> usize {
        let Some(frame) = frame else {
            return 0;
        };

        let mut dispatched = 0;

        for detected in &frame.hands {
            let hand =
                Hand::from_keypoints(detected.left, &detected.keypoints, frame.width, frame.height);

            if let Some(trace) = self.trace.as_mut() {
                trace.before_classify(&hand);
            }
            let fingers = hand.fingers_up();
            if let Some(trace) = self.trace.as_mut() {
                trace.after_classify(&hand, &fingers);
            }

            if !fingers.index {
                continue;
            }

            // Track the joint nearest the palm, not the fingertip
            let Some(base) = hand.finger(FingerTip::Index).base() else {
                continue;
            };
            let (x, y) = self.map.map(base.x, base.y);
            let mut event = Event::mouse_move(x, y);
            self.dispatcher.dispatch(&mut event);
            dispatched += 1;
        }

        dispatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::DetectedHand;
    use crate::event::{EventKind, EventName, Listener};
    use crate::hand::{FingersUp, LANDMARK_COUNT};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Sink {
        moves: Rc<RefCell<Vec<(i32, i32)>>>,
    }

    impl Listener for Sink {
        fn dispatches(&self) -> &[EventName] {
            &[EventName::MouseMove]
        }

        fn handle(&mut self, event: &mut Event) {
            if let EventKind::Move { x, y } = *event.kind() {
                self.moves.borrow_mut().push((x, y));
            }
        }
    }

    fn controller_with_sink() -> (GestureController, Rc<RefCell<Vec<(i32, i32)>>>) {
        let mut controller = GestureController::new(ScreenMap::new(1280, 720, 1920, 1080));
        let moves = Rc::new(RefCell::new(Vec::new()));
        controller.dispatcher_mut().add_listener(Box::new(Sink {
            moves: Rc::clone(&moves),
        }));
        (controller, moves)
    }

    /// Neutral hand: every keypoint at the frame center, nothing extended
    fn neutral_keypoints() -> [[f64; 2]; LANDMARK_COUNT] {
        [[0.5, 0.5]; LANDMARK_COUNT]
    }

    fn extend_index(keypoints: &mut [[f64; 2]; LANDMARK_COUNT]) {
        // Tip above the pip joint (global 6) satisfies the vertical rule
        keypoints[8] = [0.5, 0.3];
    }

    fn extend_middle(keypoints: &mut [[f64; 2]; LANDMARK_COUNT]) {
        keypoints[12] = [0.55, 0.3];
    }

    fn extend_ring(keypoints: &mut [[f64; 2]; LANDMARK_COUNT]) {
        keypoints[16] = [0.6, 0.3];
    }

    fn frame(hands: Vec<DetectedHand>) -> DetectedFrame {
        DetectedFrame {
            width: 1280,
            height: 720,
            hands,
        }
    }

    #[test]
    fn test_zero_hands_zero_dispatches() {
        let (mut controller, moves) = controller_with_sink();
        assert_eq!(controller.process(Some(&frame(Vec::new()))), 0);
        assert!(moves.borrow().is_empty());
    }

    #[test]
    fn test_no_frame_treated_as_no_hands() {
        let (mut controller, moves) = controller_with_sink();
        assert_eq!(controller.process(None), 0);
        assert!(moves.borrow().is_empty());
    }

    #[test]
    fn test_move_fires_iff_index_extended() {
        let (mut controller, moves) = controller_with_sink();

        // Neutral hand: nothing fires
        let hand = DetectedHand {
            left: false,
            keypoints: neutral_keypoints(),
        };
        assert_eq!(controller.process(Some(&frame(vec![hand]))), 0);

        // Index up: fires
        let mut keypoints = neutral_keypoints();
        extend_index(&mut keypoints);
        let hand = DetectedHand { left: false, keypoints };
        assert_eq!(controller.process(Some(&frame(vec![hand]))), 1);

        // Middle up without index: does not fire
        let mut keypoints = neutral_keypoints();
        extend_middle(&mut keypoints);
        let hand = DetectedHand { left: false, keypoints };
        assert_eq!(controller.process(Some(&frame(vec![hand]))), 0);

        assert_eq!(moves.borrow().len(), 1);
    }

    #[test]
    fn test_other_fingers_do_not_change_coordinates() {
        // Index alone, index+middle, and index+middle+ring all fire, and
        // all derive the target from the index base joint only
        let mut index_only = neutral_keypoints();
        extend_index(&mut index_only);

        let mut with_middle = index_only;
        extend_middle(&mut with_middle);

        let mut with_ring = with_middle;
        extend_ring(&mut with_ring);

        let mut targets = Vec::new();
        for keypoints in [index_only, with_middle, with_ring] {
            let (mut controller, moves) = controller_with_sink();
            let hand = DetectedHand { left: false, keypoints };
            assert_eq!(controller.process(Some(&frame(vec![hand]))), 1);
            targets.push(moves.borrow()[0]);
        }

        assert_eq!(targets[0], targets[1]);
        assert_eq!(targets[1], targets[2]);
    }

    #[test]
    fn test_move_targets_index_base_joint() {
        let (mut controller, moves) = controller_with_sink();

        let mut keypoints = neutral_keypoints();
        extend_index(&mut keypoints);
        // Put the index base joint (global 5) at camera pixel (560, 270)
        keypoints[5] = [560.0 / 1280.0, 270.0 / 720.0];

        let hand = DetectedHand { left: false, keypoints };
        controller.process(Some(&frame(vec![hand])));
        assert_eq!(*moves.borrow(), vec![(1120, 360)]);
    }

    #[test]
    fn test_multiple_hands_each_classified() {
        let (mut controller, moves) = controller_with_sink();

        let mut pointing = neutral_keypoints();
        extend_index(&mut pointing);

        let hands = vec![
            DetectedHand { left: false, keypoints: pointing },
            DetectedHand { left: true, keypoints: neutral_keypoints() },
            DetectedHand { left: true, keypoints: pointing },
        ];
        assert_eq!(controller.process(Some(&frame(hands))), 2);
        assert_eq!(moves.borrow().len(), 2);
    }

    #[test]
    fn test_trace_observes_every_hand() {
        #[derive(Default)]
        struct Counting {
            calls: Rc<RefCell<(usize, usize)>>,
        }

        impl GestureTrace for Counting {
            fn before_classify(&mut self, _hand: &Hand) {
                self.calls.borrow_mut().0 += 1;
            }
            fn after_classify(&mut self, _hand: &Hand, _fingers: &FingersUp) {
                self.calls.borrow_mut().1 += 1;
            }
        }

        let (mut controller, _moves) = controller_with_sink();
        let calls = Rc::new(RefCell::new((0, 0)));
        controller.set_trace(Box::new(Counting {
            calls: Rc::clone(&calls),
        }));

        let hands = vec![
            DetectedHand { left: false, keypoints: neutral_keypoints() },
            DetectedHand { left: true, keypoints: neutral_keypoints() },
        ];
        controller.process(Some(&frame(hands)));
        assert_eq!(*calls.borrow(), (2, 2));
    }

    #[test]
    fn test_dispatched_coordinates_always_inside_screen() {
        let (mut controller, moves) = controller_with_sink();

        // Index base far outside the interaction box on both axes
        for base in [[0.0, 0.0], [1.0, 1.0], [0.01, 0.99]] {
            let mut keypoints = neutral_keypoints();
            extend_index(&mut keypoints);
            keypoints[5] = base;
            let hand = DetectedHand { left: false, keypoints };
            controller.process(Some(&frame(vec![hand])));
        }

        for (x, y) in moves.borrow().iter() {
            assert!(*x > 0 && *x < 1920);
            assert!(*y > 0 && *y < 1080);
        }
    }
}
