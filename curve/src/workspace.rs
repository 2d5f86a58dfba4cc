//! Reusable scratch space for the group law.

use num_bigint::BigInt;

use crate::monty::MontyScratch;
use crate::Curve;

/// Number of big-integer temporaries used by point addition.
pub(crate) const WORKSPACE_TEMPORARIES: usize = 11;

/// Scratch buffers threaded through `add`, `mult2` and scalar multiplication.
///
/// One workspace must not be shared between concurrent call chains; create
/// one per thread. Its contents carry no meaning between calls.
#[derive(Clone, Debug)]
pub struct Workspace {
    monty: MontyScratch,
    bn: [BigInt; WORKSPACE_TEMPORARIES],
}

impl Workspace {
    /// Create a workspace sized for the given curve's modulus.
    pub fn new(curve: &Curve) -> Self {
        Self::with_p_words(curve.p_words().len())
    }

    /// Create a workspace for a modulus of `p_words` limbs.
    pub fn with_p_words(p_words: usize) -> Self {
        Self {
            monty: MontyScratch::with_p_words(p_words),
            bn: Default::default(),
        }
    }

    /// Word buffers for `monty_mul` and `monty_sqr`.
    #[inline]
    pub fn monty_mut(&mut self) -> &mut MontyScratch {
        &mut self.monty
    }

    /// Split into the Montgomery scratch and the bank of temporaries.
    #[inline]
    pub(crate) fn split(&mut self) -> (&mut MontyScratch, &mut [BigInt; WORKSPACE_TEMPORARIES]) {
        (&mut self.monty, &mut self.bn)
    }
}
