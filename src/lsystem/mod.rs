pub mod emit;
pub mod error;
pub mod rewriter;
pub mod trie;
pub mod turtle;

use lsystem::emit::ShapeEmitter;
use lsystem::rewriter::Rewriter;
use lsystem::turtle::TurtleInterpreter;
use params::ParamSet;
use shape::Shape;
use transform::transform::Transform;

pub use lsystem::error::LSystemError;

/// A parsed, ready-to-run L-system: turtle parameters plus the rewriting
/// rules parsed from the scene parameter dictionary. `generate` expands the
/// axiom and interprets it once per call; nothing is cached between calls.
pub struct LSystem {
    step_size: f32,
    radius: f32,
    angle: f32,
    radius_scale: f32,
    generations: u32,
    axiom: String,
    rewriter: Rewriter
}

impl LSystem {
    pub fn parse(params: &ParamSet) -> Result<LSystem, LSystemError> {
        let radius = params.find_one_float(&"radius".to_string(), 0.05);
        let step_size = params.find_one_float(&"stepsize".to_string(), 1.0);
        let angle = params.find_one_float(&"angle".to_string(), 28.0);
        let radius_scale = params.find_one_float(&"radiusscale".to_string(), 0.9);
        let generations = params.find_one_int(&"n".to_string(), 3).max(0) as u32;
        let axiom = params.find_one_str(&"axiom".to_string(), String::new());
        let rules: Vec<String> = params.find_str(&"rules".to_string())
            .map(|rules| rules.to_vec())
            .unwrap_or_else(Vec::new);

        let rewriter = Rewriter::new(&rules)?;

        Ok(LSystem { step_size, radius, angle, radius_scale, generations, axiom, rewriter })
    }

    /// Expands the axiom and interprets the result, producing the shapes the
    /// turtle traced out. The turtle's tubes and polygons are emitted in
    /// object space; since this layer has no scene graph to place the result
    /// in, object and render space coincide here (identity transforms).
    pub fn generate(&self) -> Result<Vec<Shape>, LSystemError> {
        let sequence = self.rewriter.expand(&self.axiom, self.generations);

        let mut turtle = TurtleInterpreter::new(
            self.step_size, self.radius, self.angle, self.radius_scale);
        turtle.run(&sequence)?;

        let render_from_object = Transform::new();
        let object_from_render = render_from_object.inverse();
        Ok(ShapeEmitter::emit(
            turtle.tubes(), turtle.polygons(), &render_from_object, &object_from_render))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_with(entries: &[(&str, &str)]) -> ParamSet {
        let mut params = ParamSet::new();
        for &(name, value) in entries {
            match name {
                "n" => params.add_int(&name.to_string(), vec![value.parse().unwrap()]),
                "rules" => params.add_str(&name.to_string(),
                    value.split(';').map(|s| s.to_string()).collect()),
                "axiom" => params.add_str(&name.to_string(), vec![value.to_string()]),
                _ => params.add_float(&name.to_string(), vec![value.parse().unwrap()])
            }
        }
        params
    }

    #[test]
    fn it_uses_defaults_when_params_are_absent() {
        let system = LSystem::parse(&ParamSet::new()).unwrap();
        assert_eq!(system.radius, 0.05);
        assert_eq!(system.step_size, 1.0);
        assert_eq!(system.angle, 28.0);
        assert_eq!(system.radius_scale, 0.9);
        assert_eq!(system.generations, 3);
        assert_eq!(system.axiom, "");
    }

    #[test]
    fn it_propagates_a_malformed_rule_as_an_error() {
        let params = params_with(&[("rules", "F+F"), ("axiom", "F"), ("n", "0")]);
        assert!(LSystem::parse(&params).is_err());
    }

    #[test]
    fn two_stacked_forwards_produce_six_shapes() {
        let params = params_with(&[("axiom", ">>"), ("n", "0"), ("stepsize", "1.0")]);
        let system = LSystem::parse(&params).unwrap();
        let shapes = system.generate().unwrap();
        assert_eq!(shapes.len(), 6);
    }

    #[test]
    fn a_stack_underflow_during_generation_is_an_error() {
        let params = params_with(&[("axiom", ")"), ("n", "0")]);
        let system = LSystem::parse(&params).unwrap();
        assert_eq!(system.generate(), Err(LSystemError::PopOnEmptyStack));
    }
}
