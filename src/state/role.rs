// Section roles - derived per frame from the store, never stored per section
use crate::motion::{lerp, SMOOTH};
use crate::state::navigation::{Direction, NavigationSnapshot};
use crate::state::transition::TransitionProgress;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionRole {
    Hidden,
    Entering,
    Current,
    Exiting,
}

/// Role of section `index` given the current index and the direction of the
/// last transition. The current section is `Entering` while a direction is
/// set and `Current` once the transition has settled.
pub fn section_role(current: usize, direction: Direction, index: usize) -> SectionRole {
    let offset = current as isize - index as isize;
    match (offset, direction) {
        (0, Direction::None) => SectionRole::Current,
        (0, _) => SectionRole::Entering,
        (1, Direction::Forward) | (-1, Direction::Backward) => SectionRole::Exiting,
        _ => SectionRole::Hidden,
    }
}

/// Paint order: current on top, its neighbours below, everything else last.
pub fn stacking_order(current: usize, index: usize) -> u8 {
    match current.abs_diff(index) {
        0 => 30,
        1 => 20,
        _ => 10,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionTransform {
    /// Rotation about the vertical axis, in degrees.
    pub rotate_y: f32,
    pub opacity: f32,
    pub scale: f32,
    /// Translation along the view axis; negative moves away.
    pub depth: f32,
}

impl SectionTransform {
    pub const REST: SectionTransform = SectionTransform {
        rotate_y: 0.0,
        opacity: 1.0,
        scale: 1.0,
        depth: 0.0,
    };

    /// Pose a section rotates out to. Moving forward turns the outgoing
    /// section to the left, moving backward to the right.
    pub fn exit(direction: Direction) -> Self {
        let rotate_y = match direction {
            Direction::Backward => 90.0,
            _ => -90.0,
        };
        Self {
            rotate_y,
            opacity: 0.0,
            scale: 0.8,
            depth: -200.0,
        }
    }

    /// Pose an incoming section starts from: the mirror of the exit pose.
    pub fn entry(direction: Direction) -> Self {
        let exit = Self::exit(direction);
        Self {
            rotate_y: -exit.rotate_y,
            ..exit
        }
    }

    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self {
            rotate_y: lerp(from.rotate_y, to.rotate_y, t),
            opacity: lerp(from.opacity, to.opacity, t),
            scale: lerp(from.scale, to.scale, t),
            depth: lerp(from.depth, to.depth, t),
        }
    }

    /// Horizontal squash produced by the rotation, `1.0` when facing the viewer.
    pub fn width_factor(&self) -> f32 {
        self.rotate_y.to_radians().cos().abs() * self.scale
    }
}

/// Visual transform for a section this frame. `None` when it should not be
/// painted at all.
pub fn section_transform(
    snapshot: &NavigationSnapshot,
    index: usize,
    progress: Option<&TransitionProgress>,
) -> Option<SectionTransform> {
    let direction = snapshot.direction;
    match section_role(snapshot.current, direction, index) {
        SectionRole::Hidden => None,
        SectionRole::Current => Some(SectionTransform::REST),
        SectionRole::Entering => {
            let t = progress.map_or(1.0, |p| SMOOTH.ease(p.enter));
            Some(SectionTransform::lerp(
                SectionTransform::entry(direction),
                SectionTransform::REST,
                t,
            ))
        }
        SectionRole::Exiting => {
            // Only the section actually left behind animates out; a jump from
            // further away has nothing to rotate away here.
            if snapshot.previous != index {
                return None;
            }
            let t = progress.map_or(1.0, |p| SMOOTH.ease(p.exit));
            Some(SectionTransform::lerp(
                SectionTransform::REST,
                SectionTransform::exit(direction),
                t,
            ))
        }
    }
}
