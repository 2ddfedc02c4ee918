use tagfold::prelude::*;

fn main() {
    let _ = to::<TupleTag, _>([1, 2, 3]);
}
