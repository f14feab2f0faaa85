// Drawing surface dimensions, in canvas pixels

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Surface {
        Surface { width, height }
    }

    // Layout sizes come back as i32 from the DOM; a hidden element reports 0
    pub fn from_layout(width: i32, height: i32) -> Surface {
        Surface::new(width.max(0) as u32, height.max(0) as u32)
    }

    pub fn area(&self) -> f64 {
        self.width as f64 * self.height as f64
    }

    /// One particle per `area_per_particle` px², never more than `max_particles`
    pub fn particle_count(&self, area_per_particle: f64, max_particles: usize) -> usize {
        let by_area = (self.area() / area_per_particle).floor() as usize;
        by_area.min(max_particles)
    }
}
