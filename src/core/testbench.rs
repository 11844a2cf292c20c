//! Builds the text of a testbench for a loaded component.

use crate::core::component::LoadedComponent;
use crate::core::lang::vhdl::interface::{self, DataType, Direction, Port};
use crate::core::lang::vhdl::token::Identifier;
use crate::core::swap::StrSwapTable;
use crate::core::template::{self, *};
use crate::core::timeline::{Timeline, Track};
use crate::core::timing::TimingConfig;

pub const DATA_CHANGE_WAIT: &str = "wait for DATA_CHANGE_TIME;";

/// Intermediate form of a testbench: each part is an ordered list of lines
/// waiting to be placed into the skeleton.
#[derive(Debug, PartialEq)]
pub struct Testbench {
    entity: Identifier,
    testbench: Identifier,
    timing: TimingConfig,
    component_ports: Vec<String>,
    signals: Vec<String>,
    port_map: Vec<String>,
    stimulus: Vec<String>,
}

impl Testbench {
    /// Lays out the declarations, port map, and stimulus for `component` as
    /// authored on the `timeline`.
    ///
    /// The clock always receives a signal. It only enters the component
    /// declaration and port map when the entity declares it.
    pub fn new(component: &LoadedComponent, timeline: &Timeline) -> Self {
        let clock = match component.clock() {
            Some(c) => c.clone(),
            None => Port::new(
                Identifier::Basic(String::from("clk")),
                Direction::In,
                DataType::from("std_logic"),
            ),
        };
        let ports: Vec<&Port> = component
            .clock()
            .into_iter()
            .chain(component.inputs().iter())
            .chain(component.outputs().iter())
            .collect();
        let signals: Vec<&Port> = std::iter::once(&clock)
            .chain(component.inputs().iter())
            .chain(component.outputs().iter())
            .collect();
        // auto-align by first finding longest offset needed
        let offset = interface::longest_identifier(ports.iter().map(|p| *p));
        let signal_offset = interface::longest_identifier(signals.iter().map(|p| *p));

        Self {
            entity: component.entity().name().clone(),
            testbench: component.entity().testbench().clone(),
            timing: timeline.timing().clone(),
            component_ports: ports
                .iter()
                .map(|p| p.into_interface_string(offset))
                .collect(),
            signals: signals
                .iter()
                .map(|p| p.into_declaration_string(signal_offset))
                .collect(),
            port_map: ports
                .iter()
                .map(|p| p.into_instance_string(offset))
                .collect(),
            stimulus: Self::stimulus_lines(timeline),
        }
    }

    /// Writes the assignment for every input at every segment, each segment
    /// followed by a wait.
    fn stimulus_lines(timeline: &Timeline) -> Vec<String> {
        let mut lines = Vec::new();
        for segment in 0..timeline.segment_count() {
            for track in timeline.tracks() {
                lines.push(format!(
                    "{} <= {};",
                    track.port(),
                    Self::drive_value(track, segment)
                ));
            }
            lines.push(String::from(DATA_CHANGE_WAIT));
        }
        lines
    }

    fn drive_value(track: &Track, segment: usize) -> String {
        match track.is_single_bit() {
            true => match track.is_active(segment) {
                true => String::from("'1'"),
                false => String::from("'0'"),
            },
            false => match track.value(segment) {
                Some(v) => format!("\"{}\"", v),
                None => String::from("(others => '0')"),
            },
        }
    }

    /// Places the testbench into the skeleton.
    pub fn render(&self) -> String {
        let mut table = StrSwapTable::new();
        table.add(SLOT_ENTITY, &self.entity.to_string());
        table.add(SLOT_TESTBENCH, &self.testbench.to_string());
        table.add(
            SLOT_COMPONENT_PORTS,
            &template::join_lines(&self.component_ports, PORT_INDENT, ";"),
        );
        table.add(
            SLOT_SIGNALS,
            &template::join_lines(&self.signals, DECLARATION_INDENT, ""),
        );
        table.add(SLOT_HIGH_TIME, &self.timing.high_time().to_string());
        table.add(SLOT_LOW_TIME, &self.timing.low_time().to_string());
        table.add(SLOT_TEST_LENGTH, &self.timing.test_length().to_string());
        table.add(
            SLOT_SEGMENT_DURATION,
            &self.timing.segment_duration().to_string(),
        );
        table.add(
            SLOT_PORT_MAP,
            &template::join_lines(&self.port_map, PORT_INDENT, ","),
        );
        table.add(
            SLOT_STIMULUS,
            &template::join_lines(&self.stimulus, STIMULUS_INDENT, ""),
        );
        template::fill(&table)
    }
}

#[cfg(test)]
impl Testbench {
    fn stimulus(&self) -> &Vec<String> {
        &self.stimulus
    }

    fn signals(&self) -> &Vec<String> {
        &self.signals
    }

    fn component_ports(&self) -> &Vec<String> {
        &self.component_ports
    }

    fn port_map(&self) -> &Vec<String> {
        &self.port_map
    }
}

/// Renders the testbench text for `component` driven by the `timeline`.
pub fn render(component: &LoadedComponent, timeline: &Timeline) -> String {
    Testbench::new(component, timeline).render()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    const REG: &str = r#"
entity my_register is
    port (
        clk  : in  std_logic;
        EN   : in  std_logic;
        D    : in  std_logic_vector(3 downto 0);
        Q    : out std_logic_vector(3 downto 0)
    );
end entity my_register;
"#;

    fn load(src: &str) -> LoadedComponent {
        LoadedComponent::from_source(PathBuf::from("/work/my_register.vhd"), src).unwrap()
    }

    fn id(s: &str) -> Identifier {
        Identifier::Basic(s.to_string())
    }

    #[test]
    fn scenario_single_enable() {
        let c = load("entity dut is port (clk : in std_logic; EN : in std_logic); end;");
        let timing = TimingConfig::new(10, 10, 40, 20).unwrap();
        let mut timeline = Timeline::new(&c, &timing);
        timeline.toggle(&id("EN"), 1).unwrap();
        let tb = Testbench::new(&c, &timeline);
        assert_eq!(
            tb.stimulus(),
            &vec![
                String::from("EN <= '0';"),
                String::from(DATA_CHANGE_WAIT),
                String::from("EN <= '1';"),
                String::from(DATA_CHANGE_WAIT),
            ]
        );
        let text = tb.render();
        assert_eq!(
            text.contains("constant DATA_CHANGE_TIME : time := 20 ns;"),
            true
        );
        assert_eq!(text.contains("constant TEST_LENGTH      : time := 40 ns;"), true);
    }

    #[test]
    fn zero_active_segments() {
        let c = load(REG);
        let timing = TimingConfig::default();
        let timeline = Timeline::new(&c, &timing);
        let tb = Testbench::new(&c, &timeline);
        // segments * (ports + 1)
        assert_eq!(tb.stimulus().len(), 20 * 3);
        for chunk in tb.stimulus().chunks(3) {
            assert_eq!(chunk[0], "EN <= '0';");
            assert_eq!(chunk[1], "D <= (others => '0');");
            assert_eq!(chunk[2], DATA_CHANGE_WAIT);
        }
    }

    #[test]
    fn truncated_segments() {
        let c = load(REG);
        let timing = TimingConfig::new(10, 10, 45, 20).unwrap();
        let timeline = Timeline::new(&c, &timing);
        let tb = Testbench::new(&c, &timeline);
        assert_eq!(
            tb.stimulus()
                .iter()
                .filter(|l| l.as_str() == DATA_CHANGE_WAIT)
                .count(),
            2
        );
    }

    #[test]
    fn vector_values() {
        let c = load(REG);
        let timing = TimingConfig::new(10, 10, 40, 20).unwrap();
        let mut timeline = Timeline::new(&c, &timing);
        timeline.commit(&id("D"), 0, "0101").unwrap();
        let tb = Testbench::new(&c, &timeline);
        assert_eq!(tb.stimulus()[1], "D <= \"0101\";");
        assert_eq!(tb.stimulus()[4], "D <= (others => '0');");
    }

    #[test]
    fn declarations_in_order() {
        let c = load(REG);
        let timeline = Timeline::new(&c, &TimingConfig::default());
        let tb = Testbench::new(&c, &timeline);
        assert_eq!(
            tb.component_ports(),
            &vec![
                String::from("clk : in std_logic"),
                String::from("EN  : in std_logic"),
                String::from("D   : in std_logic_vector(3 downto 0)"),
                String::from("Q   : out std_logic_vector(3 downto 0)"),
            ]
        );
        assert_eq!(
            tb.signals(),
            &vec![
                String::from("signal clk : std_logic := '0';"),
                String::from("signal EN  : std_logic := '0';"),
                String::from("signal D   : std_logic_vector(3 downto 0) := (others => '0');"),
                String::from("signal Q   : std_logic_vector(3 downto 0);"),
            ]
        );
        assert_eq!(
            tb.port_map(),
            &vec![
                String::from("clk => clk"),
                String::from("EN  => EN"),
                String::from("D   => D"),
                String::from("Q   => Q"),
            ]
        );
    }

    #[test]
    fn clock_left_out_when_undeclared() {
        let c = load("entity comb is port (a : in bit; y : out bit); end;");
        let timeline = Timeline::new(&c, &TimingConfig::default());
        let tb = Testbench::new(&c, &timeline);
        assert_eq!(tb.component_ports().len(), 2);
        assert_eq!(tb.port_map(), &vec![String::from("a => a"), String::from("y => y")]);
        assert_eq!(tb.signals()[0], "signal clk : std_logic := '0';");
    }

    #[test]
    fn clock_output_not_redeclared() {
        let c = load("entity gen is port (en : in std_logic; clk : out std_logic); end;");
        let timeline = Timeline::new(&c, &TimingConfig::default());
        let text = render(&c, &timeline);
        assert_eq!(
            text.lines()
                .filter(|l| l.trim_start().starts_with("signal clk "))
                .count(),
            1
        );
        let tb = Testbench::new(&c, &timeline);
        assert_eq!(tb.port_map(), &vec![String::from("en => en")]);
    }

    #[test]
    fn segment_longer_than_test() {
        let c = load(REG);
        let timing = TimingConfig::new(10, 10, 10, 20).unwrap();
        let timeline = Timeline::new(&c, &timing);
        let tb = Testbench::new(&c, &timeline);
        assert_eq!(tb.stimulus().is_empty(), true);
        let text = tb.render();
        assert_eq!(text.contains("wait for DATA_CHANGE_TIME;"), false);
        assert_eq!(text.contains("end architecture behavioral;"), true);
    }

    #[test]
    fn full_render() {
        let c = load("entity dut is port (clk : in std_logic; EN : in std_logic; Q : out bit); end;");
        let timing = TimingConfig::new(10, 10, 40, 20).unwrap();
        let mut timeline = Timeline::new(&c, &timing);
        timeline.toggle(&id("EN"), 1).unwrap();
        let text = render(&c, &timeline);
        let expected = r#"library ieee;
use ieee.std_logic_1164.all;

entity dut_tb is
end entity dut_tb;

architecture behavioral of dut_tb is
    -- component declaration
    component dut
        port (
            clk : in std_logic;
            EN  : in std_logic;
            Q   : out bit
        );
    end component;

    -- signals
    signal clk : std_logic := '0';
    signal EN  : std_logic := '0';
    signal Q   : bit;

    -- configurable test parameters
    constant CLK_HIGH_TIME    : time := 10 ns;
    constant CLK_LOW_TIME     : time := 10 ns;
    constant TEST_LENGTH      : time := 40 ns;
    constant DATA_CHANGE_TIME : time := 20 ns;

begin
    -- instantiate the device under test
    uut: dut
        port map (
            clk => clk,
            EN  => EN,
            Q   => Q
        );

    -- clock generation process
    clk_process: process
    begin
        while now < TEST_LENGTH loop
            clk <= '1';
            wait for CLK_HIGH_TIME;
            clk <= '0';
            wait for CLK_LOW_TIME;
        end loop;
        wait;
    end process;

    -- stimulus process
    stim_proc: process
    begin
        wait for 10 ns;

        EN <= '0';
        wait for DATA_CHANGE_TIME;
        EN <= '1';
        wait for DATA_CHANGE_TIME;

        wait for 20 ns;
        assert false report "Simulation complete." severity note;
        wait;
    end process;

end architecture behavioral;
"#;
        assert_eq!(text, expected);
    }
}
