use std;

const WORD_BITS: usize = 64;

static TRUE: bool = true;
static FALSE: bool = false;

/// A vector over GF(2), packed 64 bits per word.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct BitVector {
    len: usize,
    words: Vec<u64>,
}

impl BitVector {
    pub fn zeros(len: usize) -> BitVector {
        BitVector {
            len,
            words: vec![0; (len + WORD_BITS - 1) / WORD_BITS],
        }
    }

    pub fn from_bits(bits: &[bool]) -> BitVector {
        let mut v = BitVector::zeros(bits.len());
        for (i, bit) in bits.iter().enumerate() {
            if *bit {
                v.set(i, true);
            }
        }
        v
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, i: usize) -> bool {
        debug_assert!(i < self.len);
        (self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 0b_1 != 0
    }

    pub fn set(&mut self, i: usize, value: bool) {
        debug_assert!(i < self.len);
        let mask = 1u64 << (i % WORD_BITS);
        if value {
            self.words[i / WORD_BITS] |= mask;
        } else {
            self.words[i / WORD_BITS] &= !mask;
        }
    }

    pub fn flip(&mut self, i: usize) {
        debug_assert!(i < self.len);
        self.words[i / WORD_BITS] ^= 1u64 << (i % WORD_BITS);
    }

    /// Appends one bit. Used to widen a coefficient row into an augmented row.
    pub fn push(&mut self, value: bool) {
        if self.len % WORD_BITS == 0 {
            self.words.push(0);
        }
        self.len += 1;
        let i = self.len - 1;
        self.set(i, value);
    }

    pub fn truncate(&mut self, len: usize) {
        assert!(len <= self.len);
        self.len = len;
        self.words.truncate((len + WORD_BITS - 1) / WORD_BITS);
        if len % WORD_BITS != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << (len % WORD_BITS)) - 1;
            }
        }
    }

    /// `self += other` in GF(2), a word at a time.
    pub fn xor_assign(&mut self, other: &BitVector) {
        assert_eq!(self.len, other.len);
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a ^= *b;
        }
    }

    /// Inner product over GF(2) restricted to indices `from..self.len()`.
    pub fn dot_from(&self, other: &BitVector, from: usize) -> bool {
        assert!(self.len <= other.len);
        let mut parity = 0u32;
        for w in (from / WORD_BITS)..self.words.len() {
            let mut word = self.words[w] & other.words[w];
            if w == from / WORD_BITS {
                word &= !0u64 << (from % WORD_BITS);
            }
            parity ^= word.count_ones() & 1;
        }
        parity != 0
    }

    pub fn dot(&self, other: &BitVector) -> bool {
        self.dot_from(other, 0)
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    pub fn ones<'a>(&'a self) -> impl Iterator<Item = usize> + 'a {
        (0..self.len).filter(move |i| self.get(*i))
    }

    pub fn to_bits(&self) -> Vec<u8> {
        (0..self.len).map(|i| self.get(i) as u8).collect()
    }
}

impl std::ops::Index<usize> for BitVector {
    type Output = bool;
    fn index(&self, index: usize) -> &bool {
        if self.get(index) {
            &TRUE
        } else {
            &FALSE
        }
    }
}

impl std::fmt::Display for BitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[")?;
        for i in 0..self.len {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.get(i) as u8)?;
        }
        write!(f, "]")
    }
}

/// A dense matrix over GF(2), one packed `BitVector` per row.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BitMatrix {
    cols: usize,
    rows: Vec<BitVector>,
}

impl BitMatrix {
    pub fn zeros(rows: usize, cols: usize) -> BitMatrix {
        BitMatrix {
            cols,
            rows: vec![BitVector::zeros(cols); rows],
        }
    }

    /// Builds a matrix from 0/1 rows. All rows must be the same length.
    pub fn from_rows(rows: &[Vec<u8>]) -> BitMatrix {
        let cols = rows.first().map_or(0, |r| r.len());
        let rows: Vec<BitVector> = rows
            .iter()
            .map(|r| {
                assert_eq!(r.len(), cols);
                let bits: Vec<bool> = r.iter().map(|v| *v != 0).collect();
                BitVector::from_bits(&bits)
            })
            .collect();
        BitMatrix { cols, rows }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, r: usize, c: usize) -> bool {
        self.rows[r].get(c)
    }

    pub fn set(&mut self, r: usize, c: usize, value: bool) {
        self.rows[r].set(c, value)
    }

    pub fn row(&self, r: usize) -> &BitVector {
        &self.rows[r]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// `row[target] += row[source]`.
    pub fn add_row(&mut self, target: usize, source: usize) {
        assert_ne!(target, source);
        let (dst, src) = if target < source {
            let (head, tail) = self.rows.split_at_mut(source);
            (&mut head[target], &tail[0])
        } else {
            let (head, tail) = self.rows.split_at_mut(target);
            (&mut tail[0], &head[source])
        };
        dst.xor_assign(src);
    }

    /// Returns `[self | rhs]` with `rhs` as the last column.
    pub fn augment(&self, rhs: &BitVector) -> BitMatrix {
        assert_eq!(self.num_rows(), rhs.len());
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                let mut row = row.clone();
                row.push(rhs.get(r));
                row
            })
            .collect();
        BitMatrix {
            cols: self.cols + 1,
            rows,
        }
    }

    pub fn mul_vec(&self, x: &BitVector) -> BitVector {
        assert_eq!(self.cols, x.len());
        let mut y = BitVector::zeros(self.num_rows());
        for (r, row) in self.rows.iter().enumerate() {
            if row.dot(x) {
                y.set(r, true);
            }
        }
        y
    }

    pub fn is_symmetric(&self) -> bool {
        self.num_rows() == self.cols
            && (0..self.cols).all(|r| (r + 1..self.cols).all(|c| self.get(r, c) == self.get(c, r)))
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows.iter().map(|r| r.to_bits()).collect()
    }
}

impl std::fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in &self.rows {
            let line: Vec<String> = row.to_bits().iter().map(|b| b.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
