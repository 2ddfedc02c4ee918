use tagfold::prelude::*;

fn main() {
    let _ = at_c::<2, _>(tuple![1, 2]);
}
