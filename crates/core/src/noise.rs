//! 2D gradient noise remapped to `[0, 1]`.
//!
//! Uses Ken Perlin's improved noise over his reference permutation, so the field is a
//! fixed function of the sample point: callers vary the output by moving the sample
//! coordinates (the terrain generators put their noise seed on the second axis).

/// Ken Perlin's reference permutation of `0..256`.
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

#[inline]
fn perm(index: usize) -> usize {
    PERMUTATION[index & 255] as usize
}

// 6t^5 - 15t^4 + 10t^3
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product with one of eight gradients: the four diagonals and the four axes.
#[inline]
fn grad(hash: usize, x: f64, y: f64) -> f64 {
    match hash & 7 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}

/// Raw noise, roughly in `[-1, 1]`.
pub fn perlin_signed(x: f64, y: f64) -> f64 {
    let x_floor = x.floor();
    let y_floor = y.floor();
    let xi = (x_floor as i64 & 255) as usize;
    let yi = (y_floor as i64 & 255) as usize;
    let xf = x - x_floor;
    let yf = y - y_floor;
    let u = fade(xf);
    let v = fade(yf);

    let a = perm(xi) + yi;
    let b = perm(xi + 1) + yi;
    let aa = perm(a);
    let ab = perm(a + 1);
    let ba = perm(b);
    let bb = perm(b + 1);

    let bottom = lerp(grad(aa, xf, yf), grad(ba, xf - 1.0, yf), u);
    let top = lerp(grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0), u);
    lerp(bottom, top, v)
}

/// Noise remapped to `[0, 1]`; every integer lattice point samples to exactly `0.5`.
pub fn perlin(x: f64, y: f64) -> f64 {
    ((perlin_signed(x, y) + 1.0) * 0.5).clamp(0.0, 1.0)
}
