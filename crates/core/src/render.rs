//! Renderer capability
//!
//! The engine knows nothing about how it is drawn. Anything that can consume a
//! [`GameSnapshot`] can be a renderer: a terminal, a test recorder, a headless logger.

use crate::snapshot::GameSnapshot;

pub trait Renderer {
    type Error;

    /// Draw one frame. Called after a mutation completes, never during one.
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    type Error = R::Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error> {
        (**self).render(snapshot)
    }
}
