
mod test_load;
mod test_undo;
