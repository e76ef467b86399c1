use charlm_core::Device;

/// Row-major `[rows, cols]` buffer of token indices tagged with a device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenTensor {
    data: Vec<usize>,
    rows: usize,
    cols: usize,
    device: Device,
}

impl TokenTensor {
    /// Concatenate equal-length rows. Returns `None` if any row's length is
    /// not `cols`.
    pub fn from_rows<'a, I>(rows: I, cols: usize, device: Device) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [usize]>,
    {
        let mut data = Vec::new();
        let mut n = 0usize;
        for row in rows {
            if row.len() != cols {
                return None;
            }
            data.extend_from_slice(row);
            n += 1;
        }
        Some(Self {
            data,
            rows: n,
            cols,
            device,
        })
    }

    /// Caller guarantees `data.len() == rows * cols`.
    pub(crate) fn from_raw(data: Vec<usize>, rows: usize, cols: usize, device: Device) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self {
            data,
            rows,
            cols,
            device,
        }
    }

    /// `[rows, cols]`.
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Number of rows (the batch dimension).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Row length (the sequence dimension).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row `i`, if it exists.
    pub fn row(&self, i: usize) -> Option<&[usize]> {
        let start = i.checked_mul(self.cols)?;
        self.data.get(start..start.checked_add(self.cols)?)
    }

    /// Iterate rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
        (0..self.rows).filter_map(move |i| self.row(i))
    }

    /// Flat row-major view.
    pub fn as_slice(&self) -> &[usize] {
        &self.data
    }

    /// Rows copied out as nested vectors.
    pub fn to_nested(&self) -> Vec<Vec<usize>> {
        self.iter_rows().map(<[usize]>::to_vec).collect()
    }

    /// Flat row-major buffer.
    pub fn into_vec(self) -> Vec<usize> {
        self.data
    }

    /// Device the buffer resides on.
    pub fn device(&self) -> Device {
        self.device
    }

    /// Same buffer placed on `device`.
    pub fn to_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }
}

/// Inputs and their one-step-shifted targets; row `i` of each comes from the
/// same draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Batch {
    /// `[batch_size, seq_length]` input tokens
    pub inputs: TokenTensor,
    /// `[batch_size, seq_length]` target tokens
    pub targets: TokenTensor,
}

impl Batch {
    /// Number of sequence pairs.
    pub fn batch_size(&self) -> usize {
        self.inputs.rows()
    }

    /// Tokens per sequence.
    pub fn seq_length(&self) -> usize {
        self.inputs.cols()
    }

    /// Device of both buffers.
    pub fn device(&self) -> Device {
        self.inputs.device()
    }

    /// Both buffers placed on `device`.
    pub fn to_device(self, device: Device) -> Self {
        Self {
            inputs: self.inputs.to_device(device),
            targets: self.targets.to_device(device),
        }
    }

    /// `(inputs, targets)`.
    pub fn into_parts(self) -> (TokenTensor, TokenTensor) {
        (self.inputs, self.targets)
    }
}
