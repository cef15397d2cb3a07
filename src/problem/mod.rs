pub mod connectivity;
pub mod graph;

pub type Vertex = usize;

/// Edge weight; `0` in the matrix means "no edge".
pub type Weight = u64;

#[cfg(test)]
pub struct Arc {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Weight,
}
