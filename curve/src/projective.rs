use core::mem;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::monty::{monty_mul, monty_sqr};
use crate::numthry::inverse_mod;
use crate::{Affine, Curve, CurveError, Workspace};

/// Point on a curve in Jacobian coordinates (X:Y:Z) where (x,y) = (X/Z^2, Y/Z^3).
///
/// All three coordinates are Montgomery residues. The point at infinity is
/// any point with Z = 0; its X and Y carry no meaning.
#[derive(Clone, Debug)]
pub struct Projective {
    curve: Arc<Curve>,
    x: BigInt,
    y: BigInt,
    z: BigInt,
}

impl Projective {
    /// The point at infinity (identity element) on `curve`.
    pub fn identity(curve: &Arc<Curve>) -> Self {
        Projective {
            curve: Arc::clone(curve),
            x: BigInt::zero(),
            y: curve.r().clone(),
            z: BigInt::zero(),
        }
    }

    /// Create a point from affine coordinates.
    ///
    /// The coordinates are not checked against the curve equation; call
    /// [`check_invariants`](Self::check_invariants) for that.
    pub fn new(curve: &Arc<Curve>, x: &BigInt, y: &BigInt) -> Self {
        Projective {
            curve: Arc::clone(curve),
            x: curve.to_monty(x),
            y: curve.to_monty(y),
            z: curve.reduce(curve.r()),
        }
    }

    /// Convert from affine coordinates.
    pub fn from_affine(curve: &Arc<Curve>, point: &Affine) -> Self {
        Self::new(curve, &point.x, &point.y)
    }

    /// The curve this point lives on.
    #[inline]
    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.z.is_zero()
    }

    /// Whether both points share the same curve parameters.
    #[inline]
    pub fn same_curve(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.curve, &other.curve) || *self.curve == *other.curve
    }

    /// Affine x-coordinate, X / Z^2.
    pub fn affine_x(&self) -> Result<BigInt, CurveError> {
        if self.is_zero() {
            return Err(CurveError::IllegalTransformation);
        }

        let curve = &self.curve;
        let x = curve.from_monty(&self.x);
        let z = curve.from_monty(&self.z);

        let z2 = curve.square(&z);
        let z2_inv = inverse_mod(&z2, curve.p()).ok_or(CurveError::IllegalTransformation)?;
        Ok(curve.multiply(&x, &z2_inv))
    }

    /// Affine y-coordinate, Y / Z^3.
    pub fn affine_y(&self) -> Result<BigInt, CurveError> {
        if self.is_zero() {
            return Err(CurveError::IllegalTransformation);
        }

        let curve = &self.curve;
        let y = curve.from_monty(&self.y);
        let z = curve.from_monty(&self.z);

        let z3 = curve.cube(&z);
        let z3_inv = inverse_mod(&z3, curve.p()).ok_or(CurveError::IllegalTransformation)?;
        Ok(curve.multiply(&y, &z3_inv))
    }

    /// Convert to affine coordinates with a single field inversion.
    pub fn to_affine(&self) -> Result<Affine, CurveError> {
        if self.is_zero() {
            return Err(CurveError::IllegalTransformation);
        }

        let curve = &self.curve;
        let z = curve.from_monty(&self.z);
        let z_inv = inverse_mod(&z, curve.p()).ok_or(CurveError::IllegalTransformation)?;
        let z_inv2 = curve.square(&z_inv);
        let z_inv3 = curve.multiply(&z_inv2, &z_inv);

        let x = curve.multiply(&curve.from_monty(&self.x), &z_inv2);
        let y = curve.multiply(&curve.from_monty(&self.y), &z_inv3);
        Ok(Affine::new(x, y))
    }

    /// In-place addition: `self = self + rhs`.
    ///
    /// # Panics
    ///
    /// If `rhs` lives on a different curve.
    pub fn add_assign_with(&mut self, rhs: &Self, workspace: &mut Workspace) {
        assert!(self.same_curve(rhs), "points on different curves");

        if self.is_zero() {
            self.x.clone_from(&rhs.x);
            self.y.clone_from(&rhs.y);
            self.z.clone_from(&rhs.z);
            return;
        } else if rhs.is_zero() {
            return;
        }

        let curve = Arc::clone(&self.curve);
        let (ws, bn) = workspace.split();
        let [rhs_z2, u1, s1, lhs_z2, u2, s2, h, r, x, y, z] = bn;

        *rhs_z2 = monty_sqr(&curve, &rhs.z, ws);
        *u1 = monty_mul(&curve, &self.x, rhs_z2, ws);
        *s1 = monty_mul(&curve, &rhs.z, rhs_z2, ws);
        *s1 = monty_mul(&curve, &self.y, s1, ws);

        *lhs_z2 = monty_sqr(&curve, &self.z, ws);
        *u2 = monty_mul(&curve, &rhs.x, lhs_z2, ws);
        *s2 = monty_mul(&curve, &self.z, lhs_z2, ws);
        *s2 = monty_mul(&curve, &rhs.y, s2, ws);

        *h = curve.reduce(&(&*u2 - &*u1));
        *r = curve.reduce(&(&*s2 - &*s1));

        if h.is_zero() {
            if r.is_zero() {
                self.mult2(workspace);
                return;
            }

            *self = Projective::identity(&curve);
            return;
        }

        // u2 = H^2, s2 = H^3, then u2 = U1*H^2
        *u2 = monty_sqr(&curve, h, ws);
        *s2 = monty_mul(&curve, u2, h, ws);
        *u2 = monty_mul(&curve, u1, u2, ws);

        *x = monty_sqr(&curve, r, ws) - &*s2 - (&*u2 + &*u2);
        curve.renormalize(x);

        *u2 -= &*x;
        curve.renormalize(u2);

        *y = monty_mul(&curve, r, u2, ws) - monty_mul(&curve, s1, s2, ws);
        curve.renormalize(y);

        *z = monty_mul(&curve, &self.z, &rhs.z, ws);
        *z = monty_mul(&curve, z, h, ws);

        mem::swap(&mut self.x, x);
        mem::swap(&mut self.y, y);
        mem::swap(&mut self.z, z);
    }

    /// In-place doubling: `self = 2 * self`.
    pub fn mult2(&mut self, workspace: &mut Workspace) {
        if self.is_zero() {
            return;
        } else if self.y.is_zero() {
            // 2-torsion point
            *self = Projective::identity(&self.curve);
            return;
        }

        let curve = Arc::clone(&self.curve);
        let (ws, bn) = workspace.split();
        let [y_2, s, z4, a_z4, m, u, x, y, z, ..] = bn;

        *y_2 = monty_sqr(&curve, &self.y, ws);

        *s = curve.reduce(&(monty_mul(&curve, &self.x, y_2, ws) * 4u32));

        *z4 = monty_sqr(&curve, &self.z, ws);
        *z4 = monty_sqr(&curve, z4, ws);

        *a_z4 = monty_mul(&curve, curve.a_r(), z4, ws);

        *m = curve.reduce(&(&*a_z4 + monty_sqr(&curve, &self.x, ws) * 3u32));

        *x = monty_sqr(&curve, m, ws) - (&*s + &*s);
        curve.renormalize(x);

        *u = curve.reduce(&(monty_sqr(&curve, y_2, ws) * 8u32));

        *s -= &*x;
        curve.renormalize(s);

        *y = monty_mul(&curve, m, s, ws) - &*u;
        curve.renormalize(y);

        *z = monty_mul(&curve, &self.y, &self.z, ws) * 2u32;
        if *z >= *curve.p() {
            *z -= curve.p();
        }

        mem::swap(&mut self.x, x);
        mem::swap(&mut self.y, y);
        mem::swap(&mut self.z, z);
    }

    /// Point doubling: 2*P, leaving `self` untouched.
    pub fn double(&self) -> Self {
        let mut ws = Workspace::new(&self.curve);
        let mut out = self.clone();
        out.mult2(&mut ws);
        out
    }

    /// In-place negation: replaces Y with p - Y.
    pub fn negate(&mut self) -> &mut Self {
        if !self.y.is_zero() {
            self.y = self.curve.p() - &self.y;
        }
        self
    }

    /// Verify that the point still satisfies the curve equation.
    ///
    /// Checks y^2 = x^3 + a*x*z^4 + b*z^6 on the de-Montgomerized
    /// coordinates. The identity always passes.
    pub fn check_invariants(&self) -> Result<(), CurveError> {
        if self.is_zero() {
            return Ok(());
        }

        let curve = &self.curve;
        let x = curve.from_monty(&self.x);
        let y = curve.from_monty(&self.y);
        let z = curve.from_monty(&self.z);

        let y2 = curve.square(&y);
        let x3 = curve.cube(&x);
        let ax = curve.multiply(&x, curve.a());

        if z.is_one() {
            if curve.reduce(&(x3 + ax + curve.b())) != y2 {
                return Err(CurveError::IllegalPoint);
            }
            return Ok(());
        }

        let z2 = curve.square(&z);
        let z3 = curve.multiply(&z, &z2);
        let ax_z4 = curve.multiply(&curve.multiply(&z3, &z), &ax);
        let b_z6 = curve.multiply(curve.b(), &curve.square(&z3));

        if y2 != curve.reduce(&(x3 + ax_z4 + b_z6)) {
            return Err(CurveError::IllegalPoint);
        }
        Ok(())
    }

    /// Check if a point is on its curve.
    #[inline]
    pub fn is_on_curve(&self) -> bool {
        self.check_invariants().is_ok()
    }
}

impl PartialEq for Projective {
    fn eq(&self, other: &Self) -> bool {
        if !self.same_curve(other) {
            return false;
        }
        if self.is_zero() || other.is_zero() {
            return self.is_zero() && other.is_zero();
        }

        match (self.to_affine(), other.to_affine()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Projective {}

impl Add<&Projective> for &Projective {
    type Output = Projective;

    fn add(self, other: &Projective) -> Projective {
        let mut out = self.clone();
        out += other;
        out
    }
}

impl Add for Projective {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += &other;
        self
    }
}

impl AddAssign<&Projective> for Projective {
    fn add_assign(&mut self, other: &Projective) {
        let mut ws = Workspace::new(&self.curve);
        self.add_assign_with(other, &mut ws);
    }
}

impl AddAssign for Projective {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl Sub<&Projective> for &Projective {
    type Output = Projective;

    fn sub(self, other: &Projective) -> Projective {
        let mut out = self.clone();
        out -= other;
        out
    }
}

impl Sub for Projective {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= &other;
        self
    }
}

impl SubAssign<&Projective> for Projective {
    fn sub_assign(&mut self, other: &Projective) {
        let mut minus_other = other.clone();
        minus_other.negate();
        *self += &minus_other;
    }
}

impl SubAssign for Projective {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl Neg for Projective {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate();
        self
    }
}

impl Neg for &Projective {
    type Output = Projective;

    fn neg(self) -> Projective {
        -self.clone()
    }
}

impl TryFrom<&Projective> for Affine {
    type Error = CurveError;

    fn try_from(point: &Projective) -> Result<Self, CurveError> {
        point.to_affine()
    }
}
