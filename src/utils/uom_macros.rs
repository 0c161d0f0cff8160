#![warn(missing_docs)]
//! Module for uom macros that facilitate the creation of 2D points or single unit values
/// helper macro to create the units
#[macro_export]
macro_rules! uom_unit_creator {
    ($unit:ident, $unit_type:ident, $val1:expr) => {
        $unit_type::new::<$unit>($val1)
    };
    ($unit:ident, $unit_type:ident, $val1:expr, $val2:expr) => {
        {
            use nalgebra::Point2;
        Point2::new(
            $unit_type::new::<$unit>($val1),
            $unit_type::new::<$unit>($val2))
        }
    };
}

///macro to create a Length (or a 2D point of Lengths) in meter
#[macro_export]
macro_rules! meter {
    ($( $x:expr ),*) =>{
        {
            use uom::si::{f64::Length, length::meter};
            $crate::uom_unit_creator![meter, Length, $( $x ),*]
        }
    };
}
///macro to create a Length (or a 2D point of Lengths) in millimeter
#[macro_export]
macro_rules! millimeter {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::millimeter};
        $crate::uom_unit_creator![millimeter, Length, $( $x ),*]
    }};
}
///macro to create a Length in micrometer
#[macro_export]
macro_rules! micrometer {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::micrometer};
        $crate::uom_unit_creator![micrometer, Length, $( $x ),*]
    }};
}
///macro to create a Length in nanometer
#[macro_export]
macro_rules! nanometer {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::nanometer};
        $crate::uom_unit_creator![nanometer, Length, $( $x ),*]
    }};
}
///macro to create a Length in picometer
#[macro_export]
macro_rules! picometer {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::picometer};
        $crate::uom_unit_creator![picometer, Length, $( $x ),*]
    }};
}
///macro to create an angle in radian
#[macro_export]
macro_rules! radian {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Angle, angle::radian};
        $crate::uom_unit_creator![radian, Angle, $( $x ),*]
    }};
}
///macro to create an angle in degree
#[macro_export]
macro_rules! degree {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Angle, angle::degree};
        $crate::uom_unit_creator![degree, Angle, $( $x ),*]
    }};
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use nalgebra::Point2;
    use uom::si::{
        angle::radian,
        f64::Length,
        length::{meter, millimeter},
    };

    #[test]
    fn uom_unit_creator() {
        let meter1 = Length::new::<meter>(1.);
        let meter2 = uom_unit_creator!(meter, Length, 1.);
        assert_relative_eq!(meter1.value, meter2.value);

        let meterp12 = Point2::new(Length::new::<meter>(1.), Length::new::<meter>(2.));
        let meterp22 = uom_unit_creator!(meter, Length, 1., 2.);
        assert_relative_eq!(meterp12.x.value, meterp22.x.value);
        assert_relative_eq!(meterp12.y.value, meterp22.y.value);
    }
    #[test]
    fn millimeter_point() {
        let p = millimeter!(-12.725, 12.7);
        assert_relative_eq!(p.x.get::<millimeter>(), -12.725);
        assert_relative_eq!(p.y.value, 0.0127);
    }
    #[test]
    fn wavelength_units() {
        assert_relative_eq!(nanometer!(633.0).value, 633.0e-9);
        assert_relative_eq!(micrometer!(1.0).value, nanometer!(1000.0).value);
        assert_relative_eq!(picometer!(1.0).value, 1.0e-12);
    }
    #[test]
    fn degree_to_radian() {
        assert_relative_eq!(degree!(180.0).get::<radian>(), std::f64::consts::PI);
        assert_relative_eq!(radian!(1.0).get::<radian>(), 1.0);
    }
}
