use std::fmt::Debug;

use num_complex::Complex;
use sampling::Source;

use crate::accelerated::{mul_const_v_f32, mul_const_v_fc32};

/// Canonical representation of constants: lossless for every [`Sample`].
pub type Complex64 = Complex<f64>;

pub type Fc32 = Complex<f32>;
pub type Sc32 = Complex<i32>;
pub type Sc16 = Complex<i16>;
pub type Sc8 = Complex<i8>;

/// Signature of a flattened multiply kernel.
///
/// `res[k] = a[k] * cst[k % cst.len()]` for every `k < res.len()`.
/// `res` and `a` have the same length; the run may end part way through `cst`.
pub type MulConstFn<T> = fn(res: &mut [T], a: &[T], cst: &[T]);

/// Names the native element type of an operator instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleKind {
    Fc32,
    F32,
    Sc32,
    Sc16,
    Sc8,
    S32,
    S16,
    S8,
}

impl SampleKind {
    pub const ALL: [SampleKind; 8] = [
        SampleKind::Fc32,
        SampleKind::F32,
        SampleKind::Sc32,
        SampleKind::Sc16,
        SampleKind::Sc8,
        SampleKind::S32,
        SampleKind::S16,
        SampleKind::S8,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SampleKind::Fc32 => "fc32",
            SampleKind::F32 => "f32",
            SampleKind::Sc32 => "sc32",
            SampleKind::Sc16 => "sc16",
            SampleKind::Sc8 => "sc8",
            SampleKind::S32 => "s32",
            SampleKind::S16 => "s16",
            SampleKind::S8 => "s8",
        }
    }

    /// Size in bytes of one sample.
    pub const fn size(self) -> usize {
        match self {
            SampleKind::Fc32 | SampleKind::Sc32 => 8,
            SampleKind::F32 | SampleKind::S32 | SampleKind::Sc16 => 4,
            SampleKind::S16 | SampleKind::Sc8 => 2,
            SampleKind::S8 => 1,
        }
    }

    pub const fn is_complex(self) -> bool {
        matches!(
            self,
            SampleKind::Fc32 | SampleKind::Sc32 | SampleKind::Sc16 | SampleKind::Sc8
        )
    }
}

impl std::fmt::Display for SampleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Element type an operator can be instantiated for.
///
/// # Narrowing
///
/// [`Sample::from_complex64`] converts a canonical value into the native type:
/// - real types keep the real component and drop the imaginary one;
/// - `f32` components use `as f32` (round to nearest, out of range gives `inf`);
/// - integer components use `as iN`: truncation toward zero, saturation at the
///   type bounds, `NaN` maps to `0`.
///
/// # Arithmetic
///
/// Integer products wrap (two's complement). Complex products evaluate
/// `re = a.re * b.re - a.im * b.im` and `im = a.re * b.im + a.im * b.re`
/// in that order, which is also what the vector kernels compute.
pub trait Sample: Copy + Debug + PartialEq + Send + Sync + 'static {
    const ZERO: Self;
    const KIND: SampleKind;

    /// Vectorized kernel for this type, if any.
    const ACCELERATED: Option<MulConstFn<Self>> = None;

    fn mul_sample(self, rhs: Self) -> Self;

    fn from_complex64(c: Complex64) -> Self;

    /// Lossless widening into the canonical representation.
    fn to_complex64(self) -> Complex64;

    /// Draws a random sample, used to fill test and bench buffers.
    fn draw(source: &mut Source) -> Self;
}

impl Sample for f32 {
    const ZERO: Self = 0.0;
    const KIND: SampleKind = SampleKind::F32;
    const ACCELERATED: Option<MulConstFn<Self>> = Some(mul_const_v_f32);

    #[inline(always)]
    fn mul_sample(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn from_complex64(c: Complex64) -> Self {
        c.re as f32
    }

    #[inline(always)]
    fn to_complex64(self) -> Complex64 {
        Complex::new(self as f64, 0.0)
    }

    fn draw(source: &mut Source) -> Self {
        source.next_gaussian(1.0) as f32
    }
}

impl Sample for Fc32 {
    const ZERO: Self = Complex { re: 0.0, im: 0.0 };
    const KIND: SampleKind = SampleKind::Fc32;
    const ACCELERATED: Option<MulConstFn<Self>> = Some(mul_const_v_fc32);

    #[inline(always)]
    fn mul_sample(self, rhs: Self) -> Self {
        Complex {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }

    #[inline(always)]
    fn from_complex64(c: Complex64) -> Self {
        Complex::new(c.re as f32, c.im as f32)
    }

    #[inline(always)]
    fn to_complex64(self) -> Complex64 {
        Complex::new(self.re as f64, self.im as f64)
    }

    fn draw(source: &mut Source) -> Self {
        Complex::new(source.next_gaussian(1.0) as f32, source.next_gaussian(1.0) as f32)
    }
}

macro_rules! impl_sample_int {
    ($($t:ty => $kind:ident, $next:ident);* $(;)?) => {
        $(
            impl Sample for $t {
                const ZERO: Self = 0;
                const KIND: SampleKind = SampleKind::$kind;

                #[inline(always)]
                fn mul_sample(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline(always)]
                fn from_complex64(c: Complex64) -> Self {
                    c.re as $t
                }

                #[inline(always)]
                fn to_complex64(self) -> Complex64 {
                    Complex::new(self as f64, 0.0)
                }

                fn draw(source: &mut Source) -> Self {
                    source.$next()
                }
            }
        )*
    };
}

macro_rules! impl_sample_complex_int {
    ($($t:ty => $kind:ident, $next:ident);* $(;)?) => {
        $(
            impl Sample for Complex<$t> {
                const ZERO: Self = Complex { re: 0, im: 0 };
                const KIND: SampleKind = SampleKind::$kind;

                #[inline(always)]
                fn mul_sample(self, rhs: Self) -> Self {
                    Complex {
                        re: self.re.wrapping_mul(rhs.re).wrapping_sub(self.im.wrapping_mul(rhs.im)),
                        im: self.re.wrapping_mul(rhs.im).wrapping_add(self.im.wrapping_mul(rhs.re)),
                    }
                }

                #[inline(always)]
                fn from_complex64(c: Complex64) -> Self {
                    Complex::new(c.re as $t, c.im as $t)
                }

                #[inline(always)]
                fn to_complex64(self) -> Complex64 {
                    Complex::new(self.re as f64, self.im as f64)
                }

                fn draw(source: &mut Source) -> Self {
                    Complex::new(source.$next(), source.$next())
                }
            }
        )*
    };
}

impl_sample_int! {
    i32 => S32, next_i32;
    i16 => S16, next_i16;
    i8 => S8, next_i8;
}

impl_sample_complex_int! {
    i32 => Sc32, next_i32;
    i16 => Sc16, next_i16;
    i8 => Sc8, next_i8;
}

/// Fills `res` with samples drawn from `source`.
pub fn fill_samples<T: Sample>(res: &mut [T], source: &mut Source) {
    res.iter_mut().for_each(|x| *x = T::draw(source));
}
