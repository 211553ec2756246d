use std::io::Write;

use csv::Writer;

/// Most samples reserved before a run starts; longer runs grow as they record.
pub const PREALLOCATED_SAMPLES: usize = 1 << 20;

/// Samples of a scalar integration, recorded before each step's update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    /// Recorded times.
    pub t: Vec<f64>,
    /// Recorded values of `y`.
    pub y: Vec<f64>,
}

impl Trajectory {
    /// Constructs an empty trajectory with room for `n` samples, up to
    /// [`PREALLOCATED_SAMPLES`].
    pub fn with_capacity(n: usize) -> Self {
        let n = n.min(PREALLOCATED_SAMPLES);
        Self {
            t: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, t: f64, y: f64) {
        self.t.push(t);
        self.y.push(y);
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn first(&self) -> Option<(f64, f64)> {
        Some((*self.t.first()?, *self.y.first()?))
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        Some((*self.t.last()?, *self.y.last()?))
    }

    /// Iterates `(t, y)` pairs in recording order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.t.iter().copied().zip(self.y.iter().copied())
    }

    /// Writes a `t,y` header followed by one row per sample.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = Writer::from_writer(writer);
        writer.write_record(["t", "y"])?;
        for (t, y) in self.samples() {
            writer.write_record(&[t.to_string(), y.to_string()])?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Samples of a paired integration, recorded before each step's update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PairedTrajectory {
    pub t: Vec<f64>,
    pub y: Vec<f64>,
    pub v: Vec<f64>,
}

impl PairedTrajectory {
    pub fn with_capacity(n: usize) -> Self {
        let n = n.min(PREALLOCATED_SAMPLES);
        Self {
            t: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            v: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, t: f64, y: f64, v: f64) {
        self.t.push(t);
        self.y.push(y);
        self.v.push(v);
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn first(&self) -> Option<(f64, f64, f64)> {
        Some((*self.t.first()?, *self.y.first()?, *self.v.first()?))
    }

    pub fn last(&self) -> Option<(f64, f64, f64)> {
        Some((*self.t.last()?, *self.y.last()?, *self.v.last()?))
    }

    /// Iterates `(t, y, v)` triples in recording order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.t
            .iter()
            .zip(&self.y)
            .zip(&self.v)
            .map(|((t, y), v)| (*t, *y, *v))
    }

    /// Writes a `t,y,v` header followed by one row per sample.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = Writer::from_writer(writer);
        writer.write_record(["t", "y", "v"])?;
        for (t, y, v) in self.samples() {
            writer.write_record(&[t.to_string(), y.to_string(), v.to_string()])?;
        }
        writer.flush()?;
        Ok(())
    }
}
