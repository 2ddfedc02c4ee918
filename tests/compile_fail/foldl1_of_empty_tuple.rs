use tagfold::prelude::*;

fn main() {
    let _ = foldl1(tuple![], Plus);
}
