use na::{Point3, Rotation3, Vector3};
use overlap3d::bounding_volume::{Aabb, BoundingSphere};
use overlap3d::math::Real;
use overlap3d::shape::{Obb, Plane, Primitive, Segment, Triangle};

/// A deterministic source of random primitives.
pub struct RandomPrimitives {
    rng: oorandom::Rand32,
    /// Coordinates are generated in `[-spread, spread]`.
    pub spread: Real,
    /// Sizes are generated in `[0, max_size]`.
    pub max_size: Real,
}

impl RandomPrimitives {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: oorandom::Rand32::new(seed),
            spread: 2.0,
            max_size: 1.5,
        }
    }

    /// A generator whose coordinates and sizes are all multiplied by `scale`.
    pub fn with_scale(seed: u64, scale: Real) -> Self {
        let mut result = Self::new(seed);
        result.spread *= scale;
        result.max_size *= scale;
        result
    }

    pub fn scalar(&mut self, min: Real, max: Real) -> Real {
        min + (max - min) * self.rng.rand_float() as Real
    }

    pub fn point(&mut self) -> Point3<Real> {
        let s = self.spread;
        Point3::new(self.scalar(-s, s), self.scalar(-s, s), self.scalar(-s, s))
    }

    pub fn size(&mut self) -> Real {
        self.scalar(0.0, self.max_size)
    }

    pub fn half_extents(&mut self) -> Vector3<Real> {
        Vector3::new(self.size(), self.size(), self.size())
    }

    pub fn unit_vector(&mut self) -> Vector3<Real> {
        let v = Vector3::new(
            self.scalar(-1.0, 1.0),
            self.scalar(-1.0, 1.0),
            self.scalar(-1.0, 1.0),
        );
        v.try_normalize(1.0e-3).unwrap_or_else(Vector3::x)
    }

    pub fn aabb(&mut self) -> Aabb {
        Aabb::new(self.point(), self.half_extents())
    }

    pub fn bounding_sphere(&mut self) -> BoundingSphere {
        BoundingSphere::new(self.point(), self.size())
    }

    pub fn obb(&mut self) -> Obb {
        let angle = self.scalar(-3.0, 3.0);
        let rot = Rotation3::from_scaled_axis(self.unit_vector() * angle);
        Obb::new(self.point(), self.half_extents(), rot.into_inner())
    }

    pub fn plane(&mut self) -> Plane {
        let normal = self.unit_vector();
        Plane::from_point_normal(&self.point(), &normal)
    }

    pub fn segment(&mut self) -> Segment {
        Segment::new(self.point(), self.point())
    }

    pub fn triangle(&mut self) -> Triangle {
        Triangle::new(self.point(), self.point(), self.point())
    }

    /// One primitive of each kind, rays excluded.
    pub fn primitives(&mut self) -> [Primitive; 6] {
        [
            self.aabb().into(),
            self.bounding_sphere().into(),
            self.obb().into(),
            self.plane().into(),
            self.segment().into(),
            self.triangle().into(),
        ]
    }
}
