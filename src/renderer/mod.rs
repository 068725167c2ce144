mod pt;
mod util;

pub use pt::*;

#[derive(Debug, Copy, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub workers: u32,
}

impl RenderConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.width == 0 || self.height == 0 {
            anyhow::bail!("image size {}x{} must be non-zero", self.width, self.height);
        }
        if self.samples_per_pixel == 0 {
            anyhow::bail!("samples per pixel must be non-zero");
        }
        if self.workers == 0 {
            anyhow::bail!("worker count must be non-zero");
        }
        if self.height % self.workers != 0 {
            anyhow::bail!(
                "worker count {} must divide image height {}",
                self.workers,
                self.height
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: u32, height: u32, workers: u32) -> RenderConfig {
        RenderConfig {
            width,
            height,
            samples_per_pixel: 1,
            max_depth: 50,
            workers,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(config(800, 400, 8).validate().is_ok());
        assert!(config(1, 1, 1).validate().is_ok());
    }

    #[test]
    fn test_zero_fields_rejected() {
        assert!(config(0, 400, 8).validate().is_err());
        assert!(config(800, 0, 8).validate().is_err());
        assert!(config(800, 400, 0).validate().is_err());

        let mut zero_spp = config(800, 400, 8);
        zero_spp.samples_per_pixel = 0;
        assert!(zero_spp.validate().is_err());
    }

    #[test]
    fn test_indivisible_height_rejected() {
        assert!(config(800, 400, 7).validate().is_err());
        assert!(config(800, 401, 8).validate().is_err());
    }
}
