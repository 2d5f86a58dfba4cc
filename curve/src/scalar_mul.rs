//! Scalar multiplication by a fixed 2-bit window, most significant digit first.

use core::ops::{Mul, MulAssign};

use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use crate::{Projective, Workspace};

impl Projective {
    /// In-place scalar multiplication: `self = scalar * self`.
    ///
    /// Negative scalars multiply the negated point. Runtime depends on the
    /// scalar, so this must not be used with secret scalars where timing
    /// matters.
    pub fn mul_scalar_assign(&mut self, scalar: &BigInt, workspace: &mut Workspace) {
        let negative = scalar.sign() == Sign::Minus;
        let k = scalar.magnitude();

        match k.to_u64() {
            Some(0) => {
                *self = Projective::identity(self.curve());
                return;
            }
            Some(1) => {
                if negative {
                    self.negate();
                }
                return;
            }
            Some(2) => {
                self.mult2(workspace);
                if negative {
                    self.negate();
                }
                return;
            }
            _ => {}
        }

        let mut p1 = self.clone();
        if negative {
            p1.negate();
        }

        let mut p2 = p1.clone();
        p2.mult2(workspace);

        let mut p3 = p2.clone();
        p3.add_assign_with(&p1, workspace);

        let digits = [&p1, &p2, &p3];

        let mut acc = Projective::identity(self.curve());
        let bits = k.bits();

        for i in (0..bits - 1).step_by(2) {
            acc.mult2(workspace);
            acc.mult2(workspace);

            let shift = bits - i - 2;
            let digit = ((k.bit(shift + 1) as usize) << 1) | (k.bit(shift) as usize);
            if digit != 0 {
                acc.add_assign_with(digits[digit - 1], workspace);
            }
        }

        if bits % 2 == 1 {
            acc.mult2(workspace);
            if k.bit(0) {
                acc.add_assign_with(&p1, workspace);
            }
        }

        *self = acc;
    }

    /// Scalar multiplication returning a new point.
    pub fn mul_scalar(&self, scalar: &BigInt) -> Self {
        let mut ws = Workspace::new(self.curve());
        let mut out = self.clone();
        out.mul_scalar_assign(scalar, &mut ws);
        out
    }
}

impl Mul<&BigInt> for &Projective {
    type Output = Projective;

    fn mul(self, scalar: &BigInt) -> Projective {
        self.mul_scalar(scalar)
    }
}

impl Mul<&BigInt> for Projective {
    type Output = Projective;

    fn mul(mut self, scalar: &BigInt) -> Projective {
        self *= scalar;
        self
    }
}

impl Mul<&Projective> for &BigInt {
    type Output = Projective;

    fn mul(self, point: &Projective) -> Projective {
        point.mul_scalar(self)
    }
}

impl MulAssign<&BigInt> for Projective {
    fn mul_assign(&mut self, scalar: &BigInt) {
        let mut ws = Workspace::new(self.curve());
        self.mul_scalar_assign(scalar, &mut ws);
    }
}
