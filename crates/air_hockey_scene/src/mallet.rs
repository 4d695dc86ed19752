use core::fmt;
use air_hockey_math::*;

/// Whether the player is holding the mallet
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MalletState {
    /// Not held, drags are ignored
    #[default]
    Idle,
    /// A press hit the mallet, drags move it
    Grabbed,
}

impl fmt::Display for MalletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalletState::Idle    => f.write_str("idle"),
            MalletState::Grabbed => f.write_str("grabbed"),
        }
    }
}

/// Player mallet
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Mallet {
    pub radius            : f32,
    pub height            : f32,
    position          : f32p3,
    previous_position : f32p3,
    state             : MalletState,
}

impl Mallet {
    /// Create an idle mallet standing on the table at `position`
    pub fn new(radius: f32, height: f32, position: f32p3) -> Self {
        Self { radius, height, position, previous_position: position, state: MalletState::Idle }
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> f32p3 {
        self.position
    }

    /// Get the position before the last move
    #[inline]
    pub fn previous_position(&self) -> f32p3 {
        self.previous_position
    }

    /// Get the current state
    #[inline]
    pub fn state(&self) -> MalletState {
        self.state
    }

    #[inline]
    pub fn is_grabbed(&self) -> bool {
        self.state == MalletState::Grabbed
    }

    /// Sphere used for hit-testing presses, centered on the mallet's position with a radius of half its height
    pub fn bounding_sphere(&self) -> Sphere<f32> {
        bounding_sphere(self.position, self.height)
    }

    pub(crate) fn set_state(&mut self, state: MalletState) {
        self.state = state;
    }

    /// Move the mallet, remembering where it came from
    pub(crate) fn move_to(&mut self, position: f32p3) {
        self.previous_position = self.position;
        self.position = position;
    }

    /// Displacement of the last move, i.e. from the previous to the current position
    pub fn displacement(&self) -> f32v3 {
        Vec3::between(self.previous_position, self.position)
    }
}

/// Bounding sphere of a mallet at `position` with the given `height`
pub fn bounding_sphere(position: f32p3, height: f32) -> Sphere<f32> {
    Sphere::new(position, height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_tracks_previous() {
        let mut mallet = Mallet::new(0.08, 0.15, Point3::new(0.0, 0.075, 0.4));
        assert_eq!(mallet.state(), MalletState::Idle);
        assert_eq!(mallet.displacement(), f32v3::zero());

        mallet.move_to(Point3::new(0.1, 0.075, 0.3));
        assert_eq!(mallet.previous_position(), Point3::new(0.0, 0.075, 0.4));
        assert!(mallet.displacement().is_close_to(Vec3::new(0.1, 0.0, -0.1), 0.000001));

        let sphere = mallet.bounding_sphere();
        assert_eq!(sphere.center, mallet.position());
        assert_eq!(sphere.radius, 0.075);
    }
}
