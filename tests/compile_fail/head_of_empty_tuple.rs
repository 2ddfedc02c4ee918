use tagfold::prelude::*;

fn main() {
    let _ = head(tuple![]);
}
