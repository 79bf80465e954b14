/// Largest shift, in pixels, a pointer at the viewport edge produces
pub const MAX_SHIFT: f64 = 30.0;

/// Tick length of the smoothing loop
pub const FRAME_SECONDS: f64 = 1.0 / 60.0;

/// Longest step integrated at once; longer gaps (e.g. a background tab)
/// are truncated
const MAX_STEP_SECONDS: f64 = 0.064;

const SETTLE_DISTANCE: f64 = 0.05;
const SETTLE_SPEED: f64 = 0.05;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    fn distance_to(self, other: Offset) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Pointer position relative to the viewport center, mapped into
/// `-MAX_SHIFT..=MAX_SHIFT` on each axis
pub fn pointer_offset(client_x: f64, client_y: f64, width: f64, height: f64) -> Offset {
    let axis = |pos: f64, extent: f64| {
        if extent <= 0.0 {
            return 0.0;
        }
        let half = extent / 2.0;
        ((pos - half) / half).clamp(-1.0, 1.0) * MAX_SHIFT
    };
    Offset::new(axis(client_x, width), axis(client_y, height))
}

/// Damped spring chasing a moving target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    position: Offset,
    velocity: Offset,
}

impl Default for Spring {
    /// Critically damped: damping == 2 * sqrt(stiffness * mass)
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 20.0,
            mass: 1.0,
            position: Offset::default(),
            velocity: Offset::default(),
        }
    }
}

impl Spring {
    pub fn position(&self) -> Offset {
        self.position
    }

    pub fn is_settled(&self, target: Offset) -> bool {
        self.position.distance_to(target) < SETTLE_DISTANCE
            && self.velocity.distance_to(Offset::default()) < SETTLE_SPEED
    }

    /// Advance by `dt` seconds. Returns whether the position moved.
    pub fn step(&mut self, target: Offset, dt: f64) -> bool {
        if dt <= 0.0 {
            return false;
        }
        if self.is_settled(target) {
            if self.position == target {
                return false;
            }
            self.position = target;
            self.velocity = Offset::default();
            return true;
        }

        let dt = dt.min(MAX_STEP_SECONDS);
        let axis = |pos: f64, vel: f64, goal: f64| {
            let force = -self.stiffness * (pos - goal) - self.damping * vel;
            let vel = vel + force / self.mass * dt;
            (pos + vel * dt, vel)
        };
        let (x, vx) = axis(self.position.x, self.velocity.x, target.x);
        let (y, vy) = axis(self.position.y, self.velocity.y, target.y);
        self.position = Offset::new(x, y);
        self.velocity = Offset::new(vx, vy);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pointer_has_no_offset() {
        assert_eq!(pointer_offset(500.0, 400.0, 1000.0, 800.0), Offset::default());
    }

    #[test]
    fn edges_map_to_max_shift() {
        let top_left = pointer_offset(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(top_left, Offset::new(-MAX_SHIFT, -MAX_SHIFT));
        let beyond = pointer_offset(5000.0, 900.0, 1000.0, 800.0);
        assert_eq!(beyond, Offset::new(MAX_SHIFT, MAX_SHIFT));
    }

    #[test]
    fn empty_viewport_yields_zero() {
        assert_eq!(pointer_offset(10.0, 10.0, 0.0, 0.0), Offset::default());
    }

    #[test]
    fn spring_converges_on_target() {
        let mut spring = Spring::default();
        let target = Offset::new(24.0, -12.0);
        for _ in 0..300 {
            spring.step(target, FRAME_SECONDS);
        }
        assert!(spring.is_settled(target));
        assert_eq!(spring.position(), target);
    }

    #[test]
    fn spring_moves_toward_target_without_jumping() {
        let mut spring = Spring::default();
        let target = Offset::new(30.0, 0.0);
        assert!(spring.step(target, FRAME_SECONDS));
        let first = spring.position();
        assert!(first.x > 0.0 && first.x < target.x);
        assert_eq!(first.y, 0.0);
    }

    #[test]
    fn long_gaps_are_clamped() {
        let mut clamped = Spring::default();
        let mut reference = Spring::default();
        let target = Offset::new(30.0, 30.0);
        clamped.step(target, 5.0);
        reference.step(target, MAX_STEP_SECONDS);
        assert_eq!(clamped, reference);
    }

    #[test]
    fn settled_spring_reports_no_motion() {
        let mut spring = Spring::default();
        assert!(!spring.step(Offset::default(), FRAME_SECONDS));
        assert!(!spring.step(Offset::new(5.0, 5.0), 0.0));
    }
}
