//! Coefficient tables for the heliocentric Earth position and for nutation.
//!
//! Earth terms are the abridged VSOP87 series of Meeus, "Astronomical
//! Algorithms" (2nd ed.), Appendix III, with amplitudes already scaled by
//! 10⁻⁸ so the series evaluate to radians (L, B) and astronomical units (R).
//! Nutation terms are Table 22.A, in units of 0.0001″.

#![allow(clippy::unreadable_literal)]

use super::nutation::NutationTerm;
use crate::series::PeriodicTerm;

/// Earth heliocentric longitude, constant terms.
pub const L0: [PeriodicTerm; 64] = [
    PeriodicTerm::new(175347046e-8, 0.0, 0.0),
    PeriodicTerm::new(3341656e-8, 4.6692568, 6283.07585),
    PeriodicTerm::new(34894e-8, 4.6261, 12566.1517),
    PeriodicTerm::new(3497e-8, 2.7441, 5753.3849),
    PeriodicTerm::new(3418e-8, 2.8289, 3.5231),
    PeriodicTerm::new(3136e-8, 3.6277, 77713.7715),
    PeriodicTerm::new(2676e-8, 4.4181, 7860.4194),
    PeriodicTerm::new(2343e-8, 6.1352, 3930.2097),
    PeriodicTerm::new(1324e-8, 0.7425, 11506.7698),
    PeriodicTerm::new(1273e-8, 2.0371, 529.691),
    PeriodicTerm::new(1199e-8, 1.1096, 1577.3435),
    PeriodicTerm::new(990e-8, 5.233, 5884.927),
    PeriodicTerm::new(902e-8, 2.045, 26.298),
    PeriodicTerm::new(857e-8, 3.508, 398.149),
    PeriodicTerm::new(780e-8, 1.179, 5223.694),
    PeriodicTerm::new(753e-8, 2.533, 5507.553),
    PeriodicTerm::new(505e-8, 4.583, 18849.228),
    PeriodicTerm::new(492e-8, 4.205, 775.523),
    PeriodicTerm::new(357e-8, 2.92, 0.067),
    PeriodicTerm::new(317e-8, 5.849, 11790.629),
    PeriodicTerm::new(284e-8, 1.899, 796.298),
    PeriodicTerm::new(271e-8, 0.315, 10977.079),
    PeriodicTerm::new(243e-8, 0.345, 5486.778),
    PeriodicTerm::new(206e-8, 4.806, 2544.314),
    PeriodicTerm::new(205e-8, 1.869, 5573.143),
    PeriodicTerm::new(202e-8, 2.458, 6069.777),
    PeriodicTerm::new(156e-8, 0.833, 213.299),
    PeriodicTerm::new(132e-8, 3.411, 2942.463),
    PeriodicTerm::new(126e-8, 1.083, 20.775),
    PeriodicTerm::new(115e-8, 0.645, 0.98),
    PeriodicTerm::new(103e-8, 0.636, 4694.003),
    PeriodicTerm::new(102e-8, 0.976, 15720.839),
    PeriodicTerm::new(102e-8, 4.267, 7.114),
    PeriodicTerm::new(99e-8, 6.21, 2146.17),
    PeriodicTerm::new(98e-8, 0.68, 155.42),
    PeriodicTerm::new(86e-8, 5.98, 161000.69),
    PeriodicTerm::new(85e-8, 1.3, 6275.96),
    PeriodicTerm::new(85e-8, 3.67, 71430.7),
    PeriodicTerm::new(80e-8, 1.81, 17260.15),
    PeriodicTerm::new(79e-8, 3.04, 12036.46),
    PeriodicTerm::new(75e-8, 1.76, 5088.63),
    PeriodicTerm::new(74e-8, 3.5, 3154.69),
    PeriodicTerm::new(74e-8, 4.68, 801.82),
    PeriodicTerm::new(70e-8, 0.83, 9437.76),
    PeriodicTerm::new(62e-8, 3.98, 8827.39),
    PeriodicTerm::new(61e-8, 1.82, 7084.9),
    PeriodicTerm::new(57e-8, 2.78, 6286.6),
    PeriodicTerm::new(56e-8, 4.39, 14143.5),
    PeriodicTerm::new(56e-8, 3.47, 6279.55),
    PeriodicTerm::new(52e-8, 0.19, 12139.55),
    PeriodicTerm::new(52e-8, 1.33, 1748.02),
    PeriodicTerm::new(51e-8, 0.28, 5856.48),
    PeriodicTerm::new(49e-8, 0.49, 1194.45),
    PeriodicTerm::new(41e-8, 5.37, 8429.24),
    PeriodicTerm::new(41e-8, 2.4, 19651.05),
    PeriodicTerm::new(39e-8, 6.17, 10447.39),
    PeriodicTerm::new(37e-8, 6.04, 10213.29),
    PeriodicTerm::new(37e-8, 2.57, 1059.38),
    PeriodicTerm::new(36e-8, 1.71, 2352.87),
    PeriodicTerm::new(36e-8, 1.78, 6812.77),
    PeriodicTerm::new(33e-8, 0.59, 17789.85),
    PeriodicTerm::new(30e-8, 0.44, 83996.85),
    PeriodicTerm::new(30e-8, 2.74, 1349.87),
    PeriodicTerm::new(25e-8, 3.16, 4690.48),
];

/// Earth heliocentric longitude, terms multiplied by τ.
pub const L1: [PeriodicTerm; 34] = [
    PeriodicTerm::new(628331966747e-8, 0.0, 0.0),
    PeriodicTerm::new(206059e-8, 2.678235, 6283.07585),
    PeriodicTerm::new(4303e-8, 2.6351, 12566.1517),
    PeriodicTerm::new(425e-8, 1.59, 3.523),
    PeriodicTerm::new(119e-8, 5.796, 26.298),
    PeriodicTerm::new(109e-8, 2.966, 1577.344),
    PeriodicTerm::new(93e-8, 2.59, 18849.23),
    PeriodicTerm::new(72e-8, 1.14, 529.69),
    PeriodicTerm::new(68e-8, 1.87, 398.15),
    PeriodicTerm::new(67e-8, 4.41, 5507.55),
    PeriodicTerm::new(59e-8, 2.89, 5223.69),
    PeriodicTerm::new(56e-8, 2.17, 155.42),
    PeriodicTerm::new(45e-8, 0.4, 796.3),
    PeriodicTerm::new(36e-8, 0.47, 775.52),
    PeriodicTerm::new(29e-8, 2.65, 7.11),
    PeriodicTerm::new(21e-8, 5.34, 0.98),
    PeriodicTerm::new(19e-8, 1.85, 5486.78),
    PeriodicTerm::new(19e-8, 4.97, 213.3),
    PeriodicTerm::new(17e-8, 2.99, 6275.96),
    PeriodicTerm::new(16e-8, 0.03, 2544.31),
    PeriodicTerm::new(16e-8, 1.43, 2146.17),
    PeriodicTerm::new(15e-8, 1.21, 10977.08),
    PeriodicTerm::new(12e-8, 2.83, 1748.02),
    PeriodicTerm::new(12e-8, 3.26, 5088.63),
    PeriodicTerm::new(12e-8, 5.27, 1194.45),
    PeriodicTerm::new(12e-8, 2.08, 4694.0),
    PeriodicTerm::new(11e-8, 0.77, 553.57),
    PeriodicTerm::new(10e-8, 1.3, 6286.6),
    PeriodicTerm::new(10e-8, 4.24, 1349.87),
    PeriodicTerm::new(9e-8, 2.7, 242.73),
    PeriodicTerm::new(9e-8, 5.64, 951.72),
    PeriodicTerm::new(8e-8, 5.3, 2352.87),
    PeriodicTerm::new(6e-8, 2.65, 9437.76),
    PeriodicTerm::new(6e-8, 4.67, 4690.48),
];

/// Earth heliocentric longitude, terms multiplied by τ^2.
pub const L2: [PeriodicTerm; 20] = [
    PeriodicTerm::new(52919e-8, 0.0, 0.0),
    PeriodicTerm::new(8720e-8, 1.0721, 6283.0758),
    PeriodicTerm::new(309e-8, 0.867, 12566.152),
    PeriodicTerm::new(27e-8, 0.05, 3.52),
    PeriodicTerm::new(16e-8, 5.19, 26.3),
    PeriodicTerm::new(16e-8, 3.68, 155.42),
    PeriodicTerm::new(10e-8, 0.76, 18849.23),
    PeriodicTerm::new(9e-8, 2.06, 77713.77),
    PeriodicTerm::new(7e-8, 0.83, 775.52),
    PeriodicTerm::new(5e-8, 4.66, 1577.34),
    PeriodicTerm::new(4e-8, 1.03, 7.11),
    PeriodicTerm::new(4e-8, 3.44, 5573.14),
    PeriodicTerm::new(3e-8, 5.14, 796.3),
    PeriodicTerm::new(3e-8, 6.05, 5507.55),
    PeriodicTerm::new(3e-8, 1.19, 242.73),
    PeriodicTerm::new(3e-8, 6.12, 529.69),
    PeriodicTerm::new(3e-8, 0.31, 398.15),
    PeriodicTerm::new(3e-8, 2.28, 553.57),
    PeriodicTerm::new(2e-8, 4.38, 5223.69),
    PeriodicTerm::new(2e-8, 3.75, 0.98),
];

/// Earth heliocentric longitude, terms multiplied by τ^3.
pub const L3: [PeriodicTerm; 7] = [
    PeriodicTerm::new(289e-8, 5.844, 6283.076),
    PeriodicTerm::new(35e-8, 0.0, 0.0),
    PeriodicTerm::new(17e-8, 5.49, 12566.15),
    PeriodicTerm::new(3e-8, 5.2, 155.42),
    PeriodicTerm::new(1e-8, 4.72, 3.52),
    PeriodicTerm::new(1e-8, 5.3, 18849.23),
    PeriodicTerm::new(1e-8, 5.97, 242.73),
];

/// Earth heliocentric longitude, terms multiplied by τ^4.
pub const L4: [PeriodicTerm; 3] = [
    PeriodicTerm::new(114e-8, 3.142, 0.0),
    PeriodicTerm::new(8e-8, 4.13, 6283.08),
    PeriodicTerm::new(1e-8, 3.84, 12566.15),
];

/// Earth heliocentric longitude, terms multiplied by τ^5.
pub const L5: [PeriodicTerm; 1] = [
    PeriodicTerm::new(1e-8, 3.14, 0.0),
];

/// Earth heliocentric latitude, constant terms.
pub const B0: [PeriodicTerm; 5] = [
    PeriodicTerm::new(280e-8, 3.199, 84334.662),
    PeriodicTerm::new(102e-8, 5.422, 5507.553),
    PeriodicTerm::new(80e-8, 3.88, 5223.69),
    PeriodicTerm::new(44e-8, 3.7, 2352.87),
    PeriodicTerm::new(32e-8, 4.0, 1577.34),
];

/// Earth heliocentric latitude, terms multiplied by τ.
pub const B1: [PeriodicTerm; 2] = [
    PeriodicTerm::new(9e-8, 3.9, 5507.55),
    PeriodicTerm::new(6e-8, 1.73, 5223.69),
];

/// Earth radius vector, constant terms.
pub const R0: [PeriodicTerm; 40] = [
    PeriodicTerm::new(100013989e-8, 0.0, 0.0),
    PeriodicTerm::new(1670700e-8, 3.0984635, 6283.07585),
    PeriodicTerm::new(13956e-8, 3.05525, 12566.1517),
    PeriodicTerm::new(3084e-8, 5.1985, 77713.7715),
    PeriodicTerm::new(1628e-8, 1.1739, 5753.3849),
    PeriodicTerm::new(1576e-8, 2.8469, 7860.4194),
    PeriodicTerm::new(925e-8, 5.453, 11506.77),
    PeriodicTerm::new(542e-8, 4.564, 3930.21),
    PeriodicTerm::new(472e-8, 3.661, 5884.927),
    PeriodicTerm::new(346e-8, 0.964, 5507.553),
    PeriodicTerm::new(329e-8, 5.9, 5223.694),
    PeriodicTerm::new(307e-8, 0.299, 5573.143),
    PeriodicTerm::new(243e-8, 4.273, 11790.629),
    PeriodicTerm::new(212e-8, 5.847, 1577.344),
    PeriodicTerm::new(186e-8, 5.022, 10977.079),
    PeriodicTerm::new(175e-8, 3.012, 18849.228),
    PeriodicTerm::new(110e-8, 5.055, 5486.778),
    PeriodicTerm::new(98e-8, 0.89, 6069.78),
    PeriodicTerm::new(86e-8, 5.69, 15720.84),
    PeriodicTerm::new(86e-8, 1.27, 161000.69),
    PeriodicTerm::new(65e-8, 0.27, 17260.15),
    PeriodicTerm::new(63e-8, 0.92, 529.69),
    PeriodicTerm::new(57e-8, 2.01, 83996.85),
    PeriodicTerm::new(56e-8, 5.24, 71430.7),
    PeriodicTerm::new(49e-8, 3.25, 2544.31),
    PeriodicTerm::new(47e-8, 2.58, 775.52),
    PeriodicTerm::new(45e-8, 5.54, 9437.76),
    PeriodicTerm::new(43e-8, 6.01, 6275.96),
    PeriodicTerm::new(39e-8, 5.36, 4694.0),
    PeriodicTerm::new(38e-8, 2.39, 8827.39),
    PeriodicTerm::new(37e-8, 0.83, 19651.05),
    PeriodicTerm::new(37e-8, 4.9, 12139.55),
    PeriodicTerm::new(36e-8, 1.67, 12036.46),
    PeriodicTerm::new(35e-8, 1.84, 2942.46),
    PeriodicTerm::new(33e-8, 0.24, 7084.9),
    PeriodicTerm::new(32e-8, 0.18, 5088.63),
    PeriodicTerm::new(32e-8, 1.78, 398.15),
    PeriodicTerm::new(28e-8, 1.21, 6286.6),
    PeriodicTerm::new(28e-8, 1.9, 6279.55),
    PeriodicTerm::new(26e-8, 4.59, 10447.39),
];

/// Earth radius vector, terms multiplied by τ.
pub const R1: [PeriodicTerm; 10] = [
    PeriodicTerm::new(103019e-8, 1.10749, 6283.07585),
    PeriodicTerm::new(1721e-8, 1.0644, 12566.1517),
    PeriodicTerm::new(702e-8, 3.142, 0.0),
    PeriodicTerm::new(32e-8, 1.02, 18849.23),
    PeriodicTerm::new(31e-8, 2.84, 5507.55),
    PeriodicTerm::new(25e-8, 1.32, 5223.69),
    PeriodicTerm::new(18e-8, 1.42, 1577.34),
    PeriodicTerm::new(10e-8, 5.91, 10977.08),
    PeriodicTerm::new(9e-8, 1.42, 6275.96),
    PeriodicTerm::new(9e-8, 0.27, 5486.78),
];

/// Earth radius vector, terms multiplied by τ^2.
pub const R2: [PeriodicTerm; 6] = [
    PeriodicTerm::new(4359e-8, 5.7846, 6283.0758),
    PeriodicTerm::new(124e-8, 5.579, 12566.152),
    PeriodicTerm::new(12e-8, 3.14, 0.0),
    PeriodicTerm::new(9e-8, 3.63, 77713.77),
    PeriodicTerm::new(6e-8, 1.87, 5573.14),
    PeriodicTerm::new(3e-8, 5.47, 18849.23),
];

/// Earth radius vector, terms multiplied by τ^3.
pub const R3: [PeriodicTerm; 2] = [
    PeriodicTerm::new(145e-8, 4.273, 6283.076),
    PeriodicTerm::new(7e-8, 3.92, 12566.15),
];

/// Earth radius vector, terms multiplied by τ^4.
pub const R4: [PeriodicTerm; 1] = [
    PeriodicTerm::new(4e-8, 2.56, 6283.08),
];

/// Longitude series grouped by power of τ.
pub const EARTH_L: [&[PeriodicTerm]; 6] = [&L0, &L1, &L2, &L3, &L4, &L5];

/// Latitude series grouped by power of τ.
pub const EARTH_B: [&[PeriodicTerm]; 2] = [&B0, &B1];

/// Radius vector series grouped by power of τ.
pub const EARTH_R: [&[PeriodicTerm]; 5] = [&R0, &R1, &R2, &R3, &R4];

/// Periodic terms for nutation in longitude and obliquity.
///
/// Multipliers are for D, M, M′, F and Ω in that order.
pub const NUTATION_TERMS: [NutationTerm; 63] = [
    NutationTerm::new([0, 0, 0, 0, 1], -171996.0, -174.2, 92025.0, 8.9),
    NutationTerm::new([-2, 0, 0, 2, 2], -13187.0, -1.6, 5736.0, -3.1),
    NutationTerm::new([0, 0, 0, 2, 2], -2274.0, -0.2, 977.0, -0.5),
    NutationTerm::new([0, 0, 0, 0, 2], 2062.0, 0.2, -895.0, 0.5),
    NutationTerm::new([0, 1, 0, 0, 0], 1426.0, -3.4, 54.0, -0.1),
    NutationTerm::new([0, 0, 1, 0, 0], 712.0, 0.1, -7.0, 0.0),
    NutationTerm::new([-2, 1, 0, 2, 2], -517.0, 1.2, 224.0, -0.6),
    NutationTerm::new([0, 0, 0, 2, 1], -386.0, -0.4, 200.0, 0.0),
    NutationTerm::new([0, 0, 1, 2, 2], -301.0, 0.0, 129.0, -0.1),
    NutationTerm::new([-2, -1, 0, 2, 2], 217.0, -0.5, -95.0, 0.3),
    NutationTerm::new([-2, 0, 1, 0, 0], -158.0, 0.0, 0.0, 0.0),
    NutationTerm::new([-2, 0, 0, 2, 1], 129.0, 0.1, -70.0, 0.0),
    NutationTerm::new([0, 0, -1, 2, 2], 123.0, 0.0, -53.0, 0.0),
    NutationTerm::new([2, 0, 0, 0, 0], 63.0, 0.0, 0.0, 0.0),
    NutationTerm::new([0, 0, 1, 0, 1], 63.0, 0.1, -33.0, 0.0),
    NutationTerm::new([2, 0, -1, 2, 2], -59.0, 0.0, 26.0, 0.0),
    NutationTerm::new([0, 0, -1, 0, 1], -58.0, -0.1, 32.0, 0.0),
    NutationTerm::new([0, 0, 1, 2, 1], -51.0, 0.0, 27.0, 0.0),
    NutationTerm::new([-2, 0, 2, 0, 0], 48.0, 0.0, 0.0, 0.0),
    NutationTerm::new([0, 0, -2, 2, 1], 46.0, 0.0, -24.0, 0.0),
    NutationTerm::new([2, 0, 0, 2, 2], -38.0, 0.0, 16.0, 0.0),
    NutationTerm::new([0, 0, 2, 2, 2], -31.0, 0.0, 13.0, 0.0),
    NutationTerm::new([0, 0, 2, 0, 0], 29.0, 0.0, 0.0, 0.0),
    NutationTerm::new([-2, 0, 1, 2, 2], 29.0, 0.0, -12.0, 0.0),
    NutationTerm::new([0, 0, 0, 2, 0], 26.0, 0.0, 0.0, 0.0),
    NutationTerm::new([-2, 0, 0, 2, 0], -22.0, 0.0, 0.0, 0.0),
    NutationTerm::new([0, 0, -1, 2, 1], 21.0, 0.0, -10.0, 0.0),
    NutationTerm::new([0, 2, 0, 0, 0], 17.0, -0.1, 0.0, 0.0),
    NutationTerm::new([2, 0, -1, 0, 1], 16.0, 0.0, -8.0, 0.0),
    NutationTerm::new([-2, 2, 0, 2, 2], -16.0, 0.1, 7.0, 0.0),
    NutationTerm::new([0, 1, 0, 0, 1], -15.0, 0.0, 9.0, 0.0),
    NutationTerm::new([-2, 0, 1, 0, 1], -13.0, 0.0, 7.0, 0.0),
    NutationTerm::new([0, -1, 0, 0, 1], -12.0, 0.0, 6.0, 0.0),
    NutationTerm::new([0, 0, 2, -2, 0], 11.0, 0.0, 0.0, 0.0),
    NutationTerm::new([2, 0, -1, 2, 1], -10.0, 0.0, 5.0, 0.0),
    NutationTerm::new([2, 0, 1, 2, 2], -8.0, 0.0, 3.0, 0.0),
    NutationTerm::new([0, 1, 0, 2, 2], 7.0, 0.0, -3.0, 0.0),
    NutationTerm::new([-2, 1, 1, 0, 0], -7.0, 0.0, 0.0, 0.0),
    NutationTerm::new([0, -1, 0, 2, 2], -7.0, 0.0, 3.0, 0.0),
    NutationTerm::new([2, 0, 0, 2, 1], -7.0, 0.0, 3.0, 0.0),
    NutationTerm::new([2, 0, 1, 0, 0], 6.0, 0.0, 0.0, 0.0),
    NutationTerm::new([-2, 0, 2, 2, 2], 6.0, 0.0, -3.0, 0.0),
    NutationTerm::new([-2, 0, 1, 2, 1], 6.0, 0.0, -3.0, 0.0),
    NutationTerm::new([2, 0, -2, 0, 1], -6.0, 0.0, 3.0, 0.0),
    NutationTerm::new([2, 0, 0, 0, 1], -6.0, 0.0, 3.0, 0.0),
    NutationTerm::new([0, -1, 1, 0, 0], 5.0, 0.0, 0.0, 0.0),
    NutationTerm::new([-2, -1, 0, 2, 1], -5.0, 0.0, 3.0, 0.0),
    NutationTerm::new([-2, 0, 0, 0, 1], -5.0, 0.0, 3.0, 0.0),
    NutationTerm::new([0, 0, 2, 2, 1], -5.0, 0.0, 3.0, 0.0),
    NutationTerm::new([-2, 0, 2, 0, 1], 4.0, 0.0, 0.0, 0.0),
    NutationTerm::new([-2, 1, 0, 2, 1], 4.0, 0.0, 0.0, 0.0),
    NutationTerm::new([0, 0, 1, -2, 0], 4.0, 0.0, 0.0, 0.0),
    NutationTerm::new([-1, 0, 1, 0, 0], -4.0, 0.0, 0.0, 0.0),
    NutationTerm::new([-2, 1, 0, 0, 0], -4.0, 0.0, 0.0, 0.0),
    NutationTerm::new([1, 0, 0, 0, 0], -4.0, 0.0, 0.0, 0.0),
    NutationTerm::new([0, 0, 1, 2, 0], 3.0, 0.0, 0.0, 0.0),
    NutationTerm::new([0, 0, -2, 2, 2], -3.0, 0.0, 0.0, 0.0),
    NutationTerm::new([-1, -1, 1, 0, 0], -3.0, 0.0, 0.0, 0.0),
    NutationTerm::new([0, 1, 1, 0, 0], -3.0, 0.0, 0.0, 0.0),
    NutationTerm::new([0, -1, 1, 2, 2], -3.0, 0.0, 0.0, 0.0),
    NutationTerm::new([2, -1, -1, 2, 2], -3.0, 0.0, 0.0, 0.0),
    NutationTerm::new([0, 0, 3, 2, 2], -3.0, 0.0, 0.0, 0.0),
    NutationTerm::new([2, -1, 0, 2, 2], -3.0, 0.0, 0.0, 0.0),
];
