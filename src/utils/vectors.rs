use auto_ops::impl_op_ex;
use polars::prelude::*;

/// A three-vector of lazy column expressions.
#[derive(Clone)]
pub struct Vec3([Expr; 3]);
impl From<[Expr; 3]> for Vec3 {
    fn from(value: [Expr; 3]) -> Self {
        Self([
            value[0].clone().cast(DataType::Float64),
            value[1].clone().cast(DataType::Float64),
            value[2].clone().cast(DataType::Float64),
        ])
    }
}
impl Vec3 {
    pub fn alias<S: AsRef<str>>(&self, name: S) -> [Expr; 3] {
        let b = name.as_ref();
        [
            self.0[0].clone().alias(format!("{b}_x")),
            self.0[1].clone().alias(format!("{b}_y")),
            self.0[2].clone().alias(format!("{b}_z")),
        ]
    }
    pub fn x(&self) -> Expr {
        self.0[0].clone()
    }
    pub fn y(&self) -> Expr {
        self.0[1].clone()
    }
    pub fn z(&self) -> Expr {
        self.0[2].clone()
    }
    pub fn dot(&self, other: &Self) -> Expr {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }
    pub fn mag2(&self) -> Expr {
        self.dot(self)
    }
    pub fn mag(&self) -> Expr {
        self.mag2().sqrt()
    }
    pub fn unit(&self) -> Self {
        Self([
            self.x() / self.mag(),
            self.y() / self.mag(),
            self.z() / self.mag(),
        ])
    }
    pub fn add(&self, other: &Self) -> Self {
        Self([
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        ])
    }
}

impl_op_ex!(+ |a: &Vec3, b: &Vec3| -> Vec3 { a.add(b) });

/// A four-vector of lazy column expressions in cartesian
/// $`(p_x, p_y, p_z, E)`$ components, the working representation for sums of
/// [`PtEtaPhiM`] momenta.
#[derive(Clone)]
pub struct Vec4([Expr; 4]);
impl From<[Expr; 4]> for Vec4 {
    fn from(value: [Expr; 4]) -> Self {
        Self([
            value[0].clone().cast(DataType::Float64),
            value[1].clone().cast(DataType::Float64),
            value[2].clone().cast(DataType::Float64),
            value[3].clone().cast(DataType::Float64),
        ])
    }
}
impl Vec4 {
    pub fn alias<S: AsRef<str>>(&self, name: S) -> [Expr; 4] {
        let b = name.as_ref();
        [
            self.0[0].clone().alias(format!("{b}_px")),
            self.0[1].clone().alias(format!("{b}_py")),
            self.0[2].clone().alias(format!("{b}_pz")),
            self.0[3].clone().alias(format!("{b}_e")),
        ]
    }
    pub fn px(&self) -> Expr {
        self.0[0].clone()
    }
    pub fn py(&self) -> Expr {
        self.0[1].clone()
    }
    pub fn pz(&self) -> Expr {
        self.0[2].clone()
    }
    pub fn e(&self) -> Expr {
        self.0[3].clone()
    }
    pub fn vec3(&self) -> Vec3 {
        Vec3([self.px(), self.py(), self.pz()])
    }
    pub fn pt(&self) -> Expr {
        (self.px() * self.px() + self.py() * self.py()).sqrt()
    }
    pub fn phi(&self) -> Expr {
        self.py().arctan2(self.px())
    }
    pub fn mag2(&self) -> Expr {
        self.e() * self.e() - self.vec3().mag2()
    }
    pub fn mag(&self) -> Expr {
        self.mag2().sqrt()
    }
    pub fn add(&self, other: &Self) -> Self {
        Self([
            self.px() + other.px(),
            self.py() + other.py(),
            self.pz() + other.pz(),
            self.e() + other.e(),
        ])
    }
}

impl_op_ex!(+ |a: &Vec4, b: &Vec4| -> Vec4 { a.add(b) });

/// A four-momentum read from `{name}_pt`, `{name}_eta`, `{name}_phi`,
/// `{name}_mass` columns.
///
/// The native parameterization is kept so that the raw components stay
/// available unchanged; cartesian components are derived on demand.
#[derive(Clone)]
pub struct PtEtaPhiM([Expr; 4]);
impl From<[Expr; 4]> for PtEtaPhiM {
    fn from(value: [Expr; 4]) -> Self {
        Self([
            value[0].clone().cast(DataType::Float64),
            value[1].clone().cast(DataType::Float64),
            value[2].clone().cast(DataType::Float64),
            value[3].clone().cast(DataType::Float64),
        ])
    }
}
impl PtEtaPhiM {
    pub fn new<S: Into<PlSmallStr>>(name: S) -> Self {
        let name: PlSmallStr = name.into();
        Self([
            col(format!("{}_pt", name)).cast(DataType::Float64),
            col(format!("{}_eta", name)).cast(DataType::Float64),
            col(format!("{}_phi", name)).cast(DataType::Float64),
            col(format!("{}_mass", name)).cast(DataType::Float64),
        ])
    }
    pub fn pt(&self) -> Expr {
        self.0[0].clone()
    }
    pub fn eta(&self) -> Expr {
        self.0[1].clone()
    }
    pub fn phi(&self) -> Expr {
        self.0[2].clone()
    }
    pub fn mass(&self) -> Expr {
        self.0[3].clone()
    }
    pub fn px(&self) -> Expr {
        self.pt() * self.phi().cos()
    }
    pub fn py(&self) -> Expr {
        self.pt() * self.phi().sin()
    }
    pub fn pz(&self) -> Expr {
        self.pt() * self.eta().sinh()
    }
    pub fn energy(&self) -> Expr {
        (self.mass().pow(2) + (self.pt() * self.eta().cosh()).pow(2)).sqrt()
    }
    pub fn vec3(&self) -> Vec3 {
        Vec3([self.px(), self.py(), self.pz()])
    }
    pub fn cartesian(&self) -> Vec4 {
        Vec4([self.px(), self.py(), self.pz(), self.energy()])
    }
    /// Unit vector of the momentum projected onto the transverse plane.
    pub fn transverse_unit(&self) -> Vec3 {
        Vec3([self.phi().cos(), self.phi().sin(), lit(0.0)])
    }
}

impl_op_ex!(+ |a: &PtEtaPhiM, b: &PtEtaPhiM| -> Vec4 { a.cartesian() + b.cartesian() });
