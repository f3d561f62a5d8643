//! The BAO observation table.
//!
//! DESI DR2 consensus measurements: seven effective redshifts, each with a
//! transverse (D_M/r_d) and radial (D_H/r_d) ratio and their errors. The
//! table is fixed for the life of the process; there is no runtime source
//! for it.

use crate::domain::BaoPoint;

pub const DESI_DR2: [BaoPoint; 7] = [
    BaoPoint { z: 0.142, dm_rd: 3.48, dm_err: 0.10, dh_rd: 27.21, dh_err: 1.10 },
    BaoPoint { z: 0.510, dm_rd: 12.77, dm_err: 0.19, dh_rd: 19.85, dh_err: 0.52 },
    BaoPoint { z: 0.706, dm_rd: 16.59, dm_err: 0.21, dh_rd: 17.54, dh_err: 0.41 },
    BaoPoint { z: 0.932, dm_rd: 21.05, dm_err: 0.33, dh_rd: 15.61, dh_err: 0.38 },
    BaoPoint { z: 1.112, dm_rd: 24.11, dm_err: 0.42, dh_rd: 14.32, dh_err: 0.45 },
    BaoPoint { z: 1.491, dm_rd: 29.58, dm_err: 0.61, dh_rd: 11.23, dh_err: 0.32 },
    BaoPoint { z: 2.330, dm_rd: 39.41, dm_err: 1.10, dh_rd: 8.52, dh_err: 0.25 },
];

/// The observational table as an owned vector.
pub fn desi_dr2() -> Vec<BaoPoint> {
    DESI_DR2.to_vec()
}
