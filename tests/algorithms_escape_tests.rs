#![cfg(feature = "dev")]
//! Tests for escape-time rendering.
//!
//! ## Test Organization
//!
//! 1. **Escape Depth** - Single orbits
//! 2. **Renderer** - Pixel mapping and inverted depths
//! 3. **Depth Maps** - Construction checks

use num_complex::Complex;
use numlab::internals::algorithms::escape::{
    escape_depth, julia_depth, mandelbrot_depth, DepthMap, EscapeRenderer, Fractal,
};
use numlab::internals::primitives::errors::NumError;
use numlab::internals::primitives::grid::Region;

fn renderer(fractal: Fractal<f64>, size: usize, max_depth: u32) -> EscapeRenderer<f64> {
    EscapeRenderer {
        fractal,
        region: Region::default(),
        width: size,
        height: size,
        max_depth,
        parallel: false,
    }
}

// ============================================================================
// Escape Depth Tests
// ============================================================================

/// Test points inside and outside the Mandelbrot set.
#[test]
fn test_mandelbrot_depth() {
    assert_eq!(mandelbrot_depth(Complex::new(0.0, 0.0), 100), 100);
    assert_eq!(mandelbrot_depth(Complex::new(-1.0, 0.0), 100), 100);
    // |z1|^2 = 4 is not past the bailout; z2 = 6 is.
    assert_eq!(mandelbrot_depth(Complex::new(2.0, 0.0), 100), 1);
    assert_eq!(mandelbrot_depth(Complex::new(3.0, 0.0), 100), 0);
}

/// Test Julia orbits.
#[test]
fn test_julia_depth() {
    let c = Complex::new(0.0, 0.0);
    assert_eq!(julia_depth(Complex::new(0.5, 0.0), c, 50), 50);
    assert_eq!(julia_depth(Complex::new(3.0, 0.0), c, 50), 0);
    assert_eq!(
        escape_depth(Complex::new(0.0, 0.0), Complex::new(3.0, 0.0), 50),
        mandelbrot_depth(Complex::new(3.0, 0.0), 50)
    );
}

/// Test the fractal dispatch.
#[test]
fn test_fractal_depth_dispatch() {
    let p = Complex::new(0.25, 0.25);
    assert_eq!(
        Fractal::Mandelbrot.depth(p, 80),
        mandelbrot_depth(p, 80)
    );
    let c = Complex::new(-0.8, 0.156);
    assert_eq!(Fractal::Julia { c }.depth(p, 80), julia_depth(p, c, 80));
    assert_eq!(Fractal::<f64>::default(), Fractal::Mandelbrot);
}

// ============================================================================
// Renderer Tests
// ============================================================================

/// Test that row 0 is the top of the region.
#[test]
fn test_pixel_coordinates() {
    let r = renderer(Fractal::Mandelbrot, 4, 50);
    assert_eq!(r.pixel_coordinate(0, 3), Complex::new(-2.0, -2.0));
    assert_eq!(r.pixel_coordinate(0, 0), Complex::new(-2.0, 1.0));
    assert_eq!(r.pixel_coordinate(2, 2), Complex::new(0.0, -1.0));
}

/// Test inverted depths on a tiny raster.
#[test]
fn test_render_inverted_depths() {
    let map = renderer(Fractal::Mandelbrot, 4, 50).render().unwrap();
    assert_eq!(map.width(), 4);
    assert_eq!(map.height(), 4);
    assert_eq!(map.max_depth(), 50);

    // c = -i has a bounded orbit
    assert_eq!(map.get(2, 2), Some(0));
    // c = -2 - 2i escapes immediately
    assert_eq!(map.get(0, 3), Some(50));
    assert_eq!(map.get(4, 0), None);
    assert!(map.bounded_count() >= 1);
    assert_eq!(map.rows().count(), 4);
}

/// Test that the parallel flag does not change the picture.
#[test]
fn test_render_parallel_matches_serial() {
    let serial = renderer(Fractal::Mandelbrot, 32, 64).render().unwrap();
    let mut r = renderer(Fractal::Mandelbrot, 32, 64);
    r.parallel = true;
    assert_eq!(r.render().unwrap(), serial);
}

/// Test a Julia render over a zoomed region.
#[test]
fn test_render_julia_zoom() {
    let r = EscapeRenderer {
        fractal: Fractal::Julia {
            c: Complex::new(-0.8, 0.156),
        },
        region: Region::new(-0.75, -0.73, 0.2, 0.22).unwrap(),
        width: 16,
        height: 8,
        max_depth: 40,
        parallel: false,
    };
    let map = r.render().unwrap();
    assert_eq!(map.as_slice().len(), 128);
    assert!(map.as_slice().iter().all(|&v| v <= 40));
}

/// Test that a renderer built by hand with an empty raster or region fails cleanly.
#[test]
fn test_render_rejects_empty_raster() {
    let mut r = renderer(Fractal::Mandelbrot, 4, 50);
    r.width = 0;
    assert_eq!(
        r.render(),
        Err(NumError::InvalidResolution {
            width: 0,
            height: 4
        })
    );

    let mut r = renderer(Fractal::Mandelbrot, 4, 50);
    r.height = 0;
    assert_eq!(
        r.render(),
        Err(NumError::InvalidResolution {
            width: 4,
            height: 0
        })
    );
    // Mapping stays total on an empty raster.
    assert!(r.pixel_coordinate(0, 0).re.is_finite());

    let mut r = renderer(Fractal::Mandelbrot, 4, 50);
    r.region.x_min = 1.0;
    r.region.x_max = -1.0;
    assert_eq!(
        r.render(),
        Err(NumError::InvalidInterval {
            lower: 1.0,
            upper: -1.0
        })
    );
}

// ============================================================================
// Depth Map Tests
// ============================================================================

/// Test depth map validation.
#[test]
fn test_depth_map_from_raw() {
    let map = DepthMap::from_raw(2, 2, 10, vec![0, 3, 10, 0]).unwrap();
    assert_eq!(map.bounded_count(), 2);
    assert_eq!(map.get(0, 1), Some(10));

    assert_eq!(
        DepthMap::from_raw(2, 2, 10, vec![0; 3]),
        Err(NumError::DimensionMismatch {
            expected: 4,
            got: 3
        })
    );
    assert!(matches!(
        DepthMap::from_raw(1, 1, 10, vec![11]),
        Err(NumError::InvalidNumericValue(_))
    ));
    assert_eq!(
        DepthMap::from_raw(0, 1, 10, vec![]),
        Err(NumError::InvalidResolution {
            width: 0,
            height: 1
        })
    );
}
