/// Something the viewer can step and paint.
pub trait CellAutomata {
    fn draw(&self, screen: &mut [u8]);
    fn update(&mut self);
    fn randomize(&mut self);
    fn clear(&mut self);
    fn describe() -> String;
}
