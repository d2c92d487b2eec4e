//! Render-loop orchestration across the two engines.
//!
//! The [`FrameDriver`] owns exclusive handles to both engines and runs the
//! per-tick sequence the bridge depends on: Globe Engine render, camera
//! sampling, extraction, camera application, Scene Engine render — in that
//! strict order, single-threaded, so both draws use logically simultaneous
//! camera data. The host's display-refresh callback calls [`FrameDriver::tick`]
//! once per vsync; cancellation is simply not scheduling the next tick.

use crate::camera::extractor;
use crate::camera::state::{CameraExtrinsics, CameraState};
use crate::error::BridgeError;
use crate::frame::TangentFrame;
use crate::options::ProjectionOptions;
use crate::util::frame_timing::FrameTiming;

/// Ticks between periodic FPS log lines.
const FPS_LOG_INTERVAL: u64 = 300;

/// The geocentric globe/terrain renderer, seen through the narrow surface
/// the bridge needs.
pub trait GlobeEngine {
    /// Render the globe for this tick.
    fn render(&mut self) -> Result<(), BridgeError>;

    /// Sample the camera state. Called after [`render`](Self::render) so
    /// the sample reflects this frame.
    fn camera_extrinsics(&self) -> CameraExtrinsics;
}

/// The local-space 3D renderer, seen through the narrow surface the bridge
/// needs.
pub trait SceneEngine {
    /// Apply the extracted camera state for this tick.
    fn apply_camera(&mut self, state: &CameraState);

    /// Render the scene for this tick.
    fn render(&mut self) -> Result<(), BridgeError>;
}

/// Driver lifecycle. There is no terminal state; shutdown is the host's
/// concern (it stops scheduling ticks and tears the engines down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Constructed but not started; ticks are ignored.
    Idle,
    /// Loop active; every tick renders both engines.
    Running,
}

/// Per-tick orchestrator synchronizing the Scene Engine camera to the
/// Globe Engine.
pub struct FrameDriver<G, S> {
    globe: G,
    scene: S,
    frame: TangentFrame,
    projection: ProjectionOptions,
    state: DriverState,
    last_camera: CameraState,
    timing: FrameTiming,
    ticks: u64,
}

impl<G: GlobeEngine, S: SceneEngine> FrameDriver<G, S> {
    /// Build a driver around the two engines and the established tangent
    /// frame. The driver starts in [`DriverState::Idle`].
    pub fn new(
        globe: G,
        scene: S,
        frame: TangentFrame,
        projection: ProjectionOptions,
    ) -> Self {
        Self {
            globe,
            scene,
            frame,
            projection,
            state: DriverState::Idle,
            last_camera: CameraState::default(),
            timing: FrameTiming::new(),
            ticks: 0,
        }
    }

    /// Transition `Idle → Running`. Calling again while running is a
    /// no-op; in particular it does not reset the last valid camera state.
    pub fn start(&mut self) {
        if self.state == DriverState::Idle {
            self.state = DriverState::Running;
            log::info!("frame driver started");
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> DriverState {
        self.state
    }

    /// The camera state applied on the most recent tick.
    #[must_use]
    pub const fn camera_state(&self) -> CameraState {
        self.last_camera
    }

    /// The tangent frame this driver synchronizes against.
    #[must_use]
    pub const fn tangent_frame(&self) -> &TangentFrame {
        &self.frame
    }

    /// Run one synchronized frame. Engine render failures propagate to
    /// the host; per-frame numeric edge cases degrade to the last valid
    /// camera state so one bad frame never aborts the loop.
    pub fn tick(&mut self) -> Result<(), BridgeError> {
        if self.state != DriverState::Running {
            log::trace!("tick before start, ignoring");
            return Ok(());
        }

        self.globe.render()?;
        let extrinsics = self.globe.camera_extrinsics();
        let extracted = extractor::extract(
            &extrinsics,
            &self.frame,
            &self.projection,
            self.last_camera.yaw,
        );
        if extracted.is_finite() {
            self.last_camera = extracted;
        } else {
            log::warn!(
                "non-finite camera state extracted, holding previous frame's camera"
            );
        }
        self.scene.apply_camera(&self.last_camera);
        self.scene.render()?;

        self.timing.end_frame();
        self.ticks += 1;
        if self.ticks % FPS_LOG_INTERVAL == 0 {
            log::debug!("overlay at {:.1} fps", self.timing.fps());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::f64::consts::FRAC_PI_3;
    use std::rc::Rc;

    use glam::{DMat4, DVec3};

    use super::*;
    use crate::options::{AnchorOptions, FovAxis};

    type EventLog = Rc<RefCell<Vec<&'static str>>>;

    struct FakeGlobe {
        log: EventLog,
        extrinsics: CameraExtrinsics,
        fail: bool,
    }

    impl GlobeEngine for FakeGlobe {
        fn render(&mut self) -> Result<(), BridgeError> {
            self.log.borrow_mut().push("globe.render");
            if self.fail {
                return Err(BridgeError::Globe("context lost".into()));
            }
            Ok(())
        }

        fn camera_extrinsics(&self) -> CameraExtrinsics {
            self.log.borrow_mut().push("globe.sample");
            self.extrinsics
        }
    }

    struct FakeScene {
        log: EventLog,
        applied: Rc<RefCell<Vec<CameraState>>>,
        fail: bool,
    }

    impl SceneEngine for FakeScene {
        fn apply_camera(&mut self, state: &CameraState) {
            self.log.borrow_mut().push("scene.apply");
            self.applied.borrow_mut().push(*state);
        }

        fn render(&mut self) -> Result<(), BridgeError> {
            self.log.borrow_mut().push("scene.render");
            if self.fail {
                return Err(BridgeError::Scene("device lost".into()));
            }
            Ok(())
        }
    }

    fn tangent_frame() -> TangentFrame {
        TangentFrame::establish(&AnchorOptions::default()).unwrap()
    }

    fn projection() -> ProjectionOptions {
        ProjectionOptions {
            fov_axis: FovAxis::Vertical,
            aspect_ratio: 16.0 / 9.0,
        }
    }

    fn level_extrinsics() -> CameraExtrinsics {
        // Local forward +X / up +Y, expressed geocentrically
        CameraExtrinsics::new(DMat4::IDENTITY, DVec3::X, DVec3::Z, FRAC_PI_3)
    }

    fn driver(
        extrinsics: CameraExtrinsics,
        fail: bool,
    ) -> (FrameDriver<FakeGlobe, FakeScene>, EventLog, Rc<RefCell<Vec<CameraState>>>)
    {
        let log: EventLog = Rc::default();
        let applied = Rc::new(RefCell::new(Vec::new()));
        let globe = FakeGlobe {
            log: Rc::clone(&log),
            extrinsics,
            fail,
        };
        let scene = FakeScene {
            log: Rc::clone(&log),
            applied: Rc::clone(&applied),
            fail: false,
        };
        (
            FrameDriver::new(globe, scene, tangent_frame(), projection()),
            log,
            applied,
        )
    }

    #[test]
    fn tick_is_ignored_until_started() {
        let (mut driver, log, _) = driver(level_extrinsics(), false);
        assert_eq!(driver.state(), DriverState::Idle);
        driver.tick().unwrap();
        assert!(log.borrow().is_empty());

        driver.start();
        assert_eq!(driver.state(), DriverState::Running);
        driver.tick().unwrap();
        assert_eq!(
            *log.borrow(),
            vec!["globe.render", "globe.sample", "scene.apply", "scene.render"]
        );
    }

    #[test]
    fn strict_per_tick_ordering_holds_across_frames() {
        let (mut driver, log, _) = driver(level_extrinsics(), false);
        driver.start();
        driver.tick().unwrap();
        driver.tick().unwrap();
        let events = log.borrow();
        assert_eq!(events.len(), 8);
        assert_eq!(&events[4..], &events[..4]);
    }

    #[test]
    fn globe_failure_propagates_and_skips_scene() {
        let (mut driver, log, _) = driver(level_extrinsics(), true);
        driver.start();
        assert!(matches!(driver.tick(), Err(BridgeError::Globe(_))));
        assert_eq!(*log.borrow(), vec!["globe.render"]);
    }

    #[test]
    fn scene_failure_propagates_after_camera_applied() {
        let (mut driver, log, applied) = driver(level_extrinsics(), false);
        driver.scene.fail = true;
        driver.start();
        assert!(matches!(driver.tick(), Err(BridgeError::Scene(_))));
        // The whole tick up to the scene render still ran in order
        assert_eq!(
            *log.borrow(),
            vec!["globe.render", "globe.sample", "scene.apply", "scene.render"]
        );
        // The extracted camera was applied and kept despite the failure
        assert_eq!(applied.borrow().len(), 1);
        assert_eq!(driver.camera_state(), applied.borrow()[0]);
        assert!(driver.camera_state().is_finite());
    }

    #[test]
    fn non_finite_extraction_falls_back_to_last_camera() {
        let (mut driver, _, applied) = driver(level_extrinsics(), false);
        driver.start();
        driver.tick().unwrap();
        let good = driver.camera_state();
        assert!(good.is_finite());

        // Poison the sampled FOV; extraction goes non-finite
        driver.globe.extrinsics =
            CameraExtrinsics::new(DMat4::IDENTITY, DVec3::X, DVec3::Z, f64::NAN);
        driver.tick().unwrap();

        assert_eq!(driver.camera_state(), good);
        let applied = applied.borrow();
        assert_eq!(applied.len(), 2);
        assert_eq!(applied[1], good);
    }

    #[test]
    fn restart_does_not_reset_camera_state() {
        let (mut driver, _, _) = driver(level_extrinsics(), false);
        driver.start();
        driver.tick().unwrap();
        let before = driver.camera_state();
        driver.start();
        assert_eq!(driver.camera_state(), before);
    }
}
