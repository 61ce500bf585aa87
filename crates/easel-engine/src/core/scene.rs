use crate::paint::Color;
use crate::scene::DrawList;
use crate::time::FrameState;

/// Content contract implemented by applications.
///
/// The session clears the frame to [`background`](Scene::background), then
/// calls [`draw`](Scene::draw) once per frame; calls recorded later paint
/// over earlier ones.
pub trait Scene {
    /// Color the frame is cleared to.
    fn background(&self) -> Color;

    /// Records this frame's draw calls.
    fn draw(&mut self, frame: FrameState, list: &mut DrawList);
}
