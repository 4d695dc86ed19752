use core::fmt;
use air_hockey_math::*;

/// How a run of vertices is assembled into triangles
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrimitiveKind {
    TriangleFan,
    TriangleStrip,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveKind::TriangleFan   => f.write_str("triangle fan"),
            PrimitiveKind::TriangleStrip => f.write_str("triangle strip"),
        }
    }
}

/// A single draw call over a range of vertices
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DrawCommand {
    pub kind  : PrimitiveKind,
    /// Index of the first vertex
    pub first : usize,
    /// Number of vertices
    pub count : usize,
}

/// Vertex positions (xyz) and the draw calls using them
#[derive(Clone, PartialEq, Debug, Default)]
pub struct GeneratedData {
    pub vertex_data : Vec<f32>,
    pub draw_list   : Vec<DrawCommand>,
}

impl GeneratedData {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len() / ObjectBuilder::FLOATS_PER_VERTEX
    }

    /// Get the position of a vertex
    pub fn vertex(&self, index: usize) -> Option<f32p3> {
        let start = index * ObjectBuilder::FLOATS_PER_VERTEX;
        match self.vertex_data.get(start..start + ObjectBuilder::FLOATS_PER_VERTEX) {
            Some(&[x, y, z]) => Some(Point3::new(x, y, z)),
            _ => None,
        }
    }
}

/// Builds the vertex data for the puck and mallets out of circles and open cylinders
pub struct ObjectBuilder {
    data : GeneratedData,
}

impl ObjectBuilder {
    pub const FLOATS_PER_VERTEX : usize = 3;

    /// Vertices needed for a circle: the center, plus the first point on the edge repeated to close the fan
    pub const fn circle_vertex_count(num_points: usize) -> usize {
        1 + (num_points + 1)
    }

    /// Vertices needed for an open cylinder: 2 per point, with the first pair repeated to close the strip
    pub const fn open_cylinder_vertex_count(num_points: usize) -> usize {
        (num_points + 1) * 2
    }

    fn with_vertex_count(vertex_count: usize) -> Self {
        Self { data: GeneratedData {
            vertex_data: Vec::with_capacity(vertex_count * Self::FLOATS_PER_VERTEX),
            draw_list: Vec::new(),
        } }
    }

    /// Build a puck: a closed top with open sides
    pub fn create_puck(puck: Cylinder<f32>, num_points: usize) -> GeneratedData {
        let mut builder = Self::with_vertex_count(Self::circle_vertex_count(num_points) + Self::open_cylinder_vertex_count(num_points));

        builder.append_circle(puck.top(), num_points);
        builder.append_open_cylinder(puck, num_points);
        builder.build()
    }

    /// Build a mallet: a wide base taking up a quarter of the height, and a handle of a third of the radius on top of it
    pub fn create_mallet(center: f32p3, radius: f32, height: f32, num_points: usize) -> GeneratedData {
        let mut builder = Self::with_vertex_count((Self::circle_vertex_count(num_points) + Self::open_cylinder_vertex_count(num_points)) * 2);

        let base_height = height * 0.25;
        let base_circle = Circle::new(center.translate_y(-base_height), radius);
        let base_cylinder = Cylinder::new(base_circle.center.translate_y(-base_height / 2.0), radius, base_height);

        builder.append_circle(base_circle, num_points);
        builder.append_open_cylinder(base_cylinder, num_points);

        let handle_height = height * 0.75;
        let handle_radius = radius / 3.0;
        let handle_circle = Circle::new(center.translate_y(height * 0.5), handle_radius);
        let handle_cylinder = Cylinder::new(handle_circle.center.translate_y(-handle_height / 2.0), handle_radius, handle_height);

        builder.append_circle(handle_circle, num_points);
        builder.append_open_cylinder(handle_cylinder, num_points);
        builder.build()
    }

    fn next_vertex(&self) -> usize {
        self.data.vertex_data.len() / Self::FLOATS_PER_VERTEX
    }

    fn push_vertex(&mut self, point: f32p3) {
        self.data.vertex_data.extend_from_slice(&point.to_array());
    }

    fn edge_angle(index: usize, num_points: usize) -> Radians<f32> {
        Radians(index as f32 / num_points as f32 * f32::TWO_PI)
    }

    fn append_circle(&mut self, circle: Circle<f32>, num_points: usize) {
        let first = self.next_vertex();

        self.push_vertex(circle.center);
        for i in 0..=num_points {
            self.push_vertex(circle.point_on_edge(Self::edge_angle(i, num_points)));
        }

        self.data.draw_list.push(DrawCommand { kind: PrimitiveKind::TriangleFan, first, count: Self::circle_vertex_count(num_points) });
    }

    fn append_open_cylinder(&mut self, cylinder: Cylinder<f32>, num_points: usize) {
        let first = self.next_vertex();
        let bottom = cylinder.bottom();
        let top = cylinder.top();

        for i in 0..=num_points {
            let angle = Self::edge_angle(i, num_points);
            self.push_vertex(bottom.point_on_edge(angle));
            self.push_vertex(top.point_on_edge(angle));
        }

        self.data.draw_list.push(DrawCommand { kind: PrimitiveKind::TriangleStrip, first, count: Self::open_cylinder_vertex_count(num_points) });
    }

    fn build(self) -> GeneratedData {
        self.data
    }
}
